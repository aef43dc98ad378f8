//! The book catalog: data model, persistence, and operations.
//!
//! The catalog is an ordered, in-memory list of book records backed by a
//! single JSON file. Insertion order is preserved and duplicate titles are
//! permitted; removal deletes every record whose title matches
//! case-insensitively. Every mutating operation rewrites the whole file
//! before returning, so memory and disk never disagree between calls.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};
use crate::fs::write_atomic;

/// A single book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, used as the (case-insensitive) key for removal
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year (the CLI enforces 1000-9999)
    pub year: i32,

    /// Genre label
    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

/// Builder for a book about to be added to the catalog.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read: false,
        }
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    fn into_book(self) -> Book {
        Book {
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre,
            read: self.read,
        }
    }
}

/// Which field a search query matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

/// Where a loaded catalog came from.
///
/// `Fresh` means the library file was absent and an empty catalog was
/// initialized; that is a normal first run, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Existing,
    Fresh,
}

/// Reading statistics over the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// Read percentage in [0, 100]; 0 for an empty catalog.
    pub percent: f64,
}

impl Stats {
    /// Reading progress as a fraction in [0, 1].
    pub fn progress(&self) -> f64 {
        self.percent / 100.0
    }
}

/// The catalog store: the in-memory book list plus its backing file.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    books: Vec<Book>,
}

impl Catalog {
    /// Load the catalog from `path`.
    ///
    /// A missing file yields an empty catalog with `LoadOrigin::Fresh`. A
    /// file that exists but does not parse is fatal (`ShelfError::Malformed`)
    /// rather than a silent empty start.
    pub fn load(path: impl Into<PathBuf>) -> Result<(Self, LoadOrigin)> {
        let path = path.into();
        if !path.exists() {
            return Ok((Self { path, books: Vec::new() }, LoadOrigin::Fresh));
        }

        let contents = std::fs::read_to_string(&path)?;
        let books: Vec<Book> = serde_json::from_str(&contents).map_err(|source| {
            ShelfError::Malformed {
                path: path.clone(),
                source,
            }
        })?;
        Ok((Self { path, books }, LoadOrigin::Existing))
    }

    /// Path to the backing library file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in stored (insertion) order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Append a book and persist. No duplicate check; the same title may
    /// appear any number of times.
    pub fn add(&mut self, book: NewBook) -> Result<&Book> {
        self.books.push(book.into_book());
        self.save()?;
        Ok(&self.books[self.books.len() - 1])
    }

    /// Remove every book whose title matches `title` case-insensitively.
    ///
    /// Persists afterward regardless of whether anything matched, and returns
    /// the number of records removed (0 means not found).
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        let needle = title.to_lowercase();
        let before = self.books.len();
        self.books.retain(|book| book.title.to_lowercase() != needle);
        let removed = before - self.books.len();
        self.save()?;
        Ok(removed)
    }

    /// Case-insensitive substring search over the selected field.
    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                let haystack = match field {
                    SearchField::Title => &book.title,
                    SearchField::Author => &book.author,
                };
                haystack.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Compute reading statistics. Safe on an empty catalog.
    pub fn stats(&self) -> Stats {
        let total = self.books.len();
        let read = self.books.iter().filter(|book| book.read).count();
        let percent = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Stats {
            total,
            read,
            unread: total - read,
            percent,
        }
    }

    /// Serialize the full catalog and overwrite the backing file.
    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.books)?;
        write_atomic(&self.path, contents.as_bytes())
            .map_err(|err| ShelfError::Storage(err.to_string()))?;
        Ok(())
    }
}
