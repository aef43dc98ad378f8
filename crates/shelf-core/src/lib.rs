//! # Shelf Core
//!
//! Core library for Shelf - a single-user book-catalog manager.
//!
//! This crate provides the data model, the catalog store, and the operations
//! over it, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **catalog**: The `Book` record, the `Catalog` store, and the
//!   add/remove/search/list/stats operations
//! - **fs**: Atomic whole-file writes for persistence
//! - **error**: Error types shared by all core operations
//!
//! The core never prints and never exits; every operation returns a
//! structured result that the presentation layer maps to display.

pub mod catalog;
pub mod error;
pub mod fs;

pub use catalog::{Book, Catalog, LoadOrigin, NewBook, SearchField, Stats};
pub use error::{Result, ShelfError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
