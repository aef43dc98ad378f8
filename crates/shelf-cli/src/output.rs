//! Stable JSON shapes for `--json` output.
//!
//! These mirror the core types but are owned by the CLI so the wire format
//! stays stable even if the core models change.

use serde::Serialize;

use shelf_core::{Book, Stats};

pub fn books_json(books: &[&Book]) -> Vec<serde_json::Value> {
    books
        .iter()
        .map(|book| {
            serde_json::json!({
                "title": book.title,
                "author": book.author,
                "year": book.year,
                "genre": book.genre,
                "read": book.read,
            })
        })
        .collect()
}

/// Receipt for a remove operation. `status` is the user-facing binary signal;
/// `removed` keeps the exact count for scripts.
#[derive(Debug, Serialize)]
pub struct RemoveReceipt<'a> {
    pub status: &'static str,
    pub title: &'a str,
    pub removed: usize,
}

impl<'a> RemoveReceipt<'a> {
    pub fn new(title: &'a str, removed: usize) -> Self {
        Self {
            status: if removed > 0 { "removed" } else { "not_found" },
            title,
            removed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    pub percent: f64,
    /// Progress fraction in [0, 1]
    pub progress: f64,
}

impl From<Stats> for StatsJson {
    fn from(stats: Stats) -> Self {
        Self {
            total: stats.total,
            read: stats.read,
            unread: stats.unread,
            percent: stats.percent,
            progress: stats.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_receipt_status() {
        let hit = RemoveReceipt::new("Dune", 2);
        assert_eq!(hit.status, "removed");
        let miss = RemoveReceipt::new("Dune", 0);
        assert_eq!(miss.status, "not_found");
    }

    #[test]
    fn test_books_json_shape() {
        let book = Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: "Sci-Fi".to_string(),
            read: true,
        };
        let values = books_json(&[&book]);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["title"], "Dune");
        assert_eq!(values[0]["year"], 1965);
        assert_eq!(values[0]["read"], true);
    }
}
