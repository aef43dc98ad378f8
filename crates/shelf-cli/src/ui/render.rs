//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};

use shelf_core::Book;

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Shelf · command (context)"
/// Plain mode: "shelf command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        super::OutputMode::Pretty => {
            let title = styled("Shelf", styles::bold(), ctx.color);
            if let Some(c) = context {
                format!("{} \u{00B7} {} ({})", title, command, c)
            } else {
                format!("{} \u{00B7} {}", title, command)
            }
        }
        super::OutputMode::Plain => format!("shelf {}", command),
        super::OutputMode::Json => String::new(),
    }
}

/// Render a badge with a message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let token = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        token
    } else {
        format!("{} {}", token, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Read-status label for a book.
pub fn read_status(book: &Book) -> &'static str {
    if book.read {
        "Read"
    } else {
        "Unread"
    }
}

const TITLE_MAX: usize = 40;

/// Render books as a table (pretty mode).
pub fn book_table(ctx: &UiContext, books: &[&Book]) -> String {
    let mut table = Table::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Author", "Year", "Genre", "Status"]);

    for book in books {
        table.add_row(vec![
            truncate(&book.title, TITLE_MAX),
            truncate(&book.author, TITLE_MAX),
            book.year.to_string(),
            book.genre.clone(),
            read_status(book).to_string(),
        ]);
    }

    table.to_string()
}

/// Render one book as a stable plain-mode line.
pub fn book_line(book: &Book) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        single_line(&book.title),
        single_line(&book.author),
        book.year,
        single_line(&book.genre),
        read_status(book).to_lowercase()
    )
}

const BAR_WIDTH: usize = 20;

/// Render a static reading-progress bar for a fraction in [0, 1].
pub fn reading_bar(ctx: &UiContext, fraction: f64) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    let (fill, rest) = if ctx.unicode {
        ("\u{2588}", "\u{2591}") // █ ░
    } else {
        ("#", "-")
    };
    format!(
        "[{}{}] {:.1}%",
        fill.repeat(filled),
        rest.repeat(BAR_WIDTH - filled),
        clamped * 100.0
    )
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Collapse a string onto one line (newlines become spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
