use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use shelf_core::{SearchField, VERSION};

/// Shelf - a single-user book-catalog manager for the terminal
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the library file
    #[arg(short, long, global = true, env = "SHELF_LIBRARY")]
    pub library: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Publication year (1000-9999)
    #[arg(long)]
    pub year: Option<i32>,

    /// Genre label
    #[arg(long)]
    pub genre: Option<String>,

    /// Mark the book as already read
    #[arg(long)]
    pub read: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Title of the book to remove (case-insensitive, removes all matches)
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Output a JSON receipt
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Field to search
    #[arg(long, value_enum, default_value_t = SearchBy::Title)]
    pub by: SearchBy,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// The two searchable fields.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBy {
    Title,
    Author,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Title => SearchField::Title,
            SearchBy::Author => SearchField::Author,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the library
    Add(AddArgs),

    /// Remove every book with a matching title
    Remove(RemoveArgs),

    /// Search the library by title or author
    Search(SearchArgs),

    /// List the whole library in stored order
    List(ListArgs),

    /// Show reading statistics
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
