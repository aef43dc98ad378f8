//! UI primitives for the Shelf CLI.
//!
//! - **context**: Output mode resolution and environment detection (TTY,
//!   width, color)
//! - **theme**: Badge tokens and the color palette
//! - **render**: Headers, badges, key-value lines, book tables, the reading
//!   progress bar, and string helpers

mod context;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use theme::Badge;
