//! Shelf CLI - a single-user book-catalog manager for the terminal
//!
//! This is the command-line interface for Shelf. It collects user input,
//! invokes the core catalog operations, and renders their results.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{books, misc};
use crate::ui::{render, Badge, UiContext};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let ctx = UiContext::from_env(false, None);
        eprintln!("{}", render::badge(&ctx, Badge::Err, &format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            books::handle_add(cli, args)?;
        }
        Some(Commands::Remove(args)) => {
            books::handle_remove(cli, args)?;
        }
        Some(Commands::Search(args)) => {
            books::handle_search(cli, args)?;
        }
        Some(Commands::List(args)) => {
            books::handle_list(cli, args)?;
        }
        Some(Commands::Stats(args)) => {
            books::handle_stats(cli, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Shelf v{}", shelf_core::VERSION);
            println!("\nQuickstart:");
            println!("  shelf add --title \"Dune\" --author \"Frank Herbert\" --year 1965 --genre Sci-Fi");
            println!("  shelf list");
            println!("  shelf search herbert --by author");
            println!("  shelf stats");
            println!("\nRun `shelf --help` for full usage.");
        }
    }

    Ok(())
}
