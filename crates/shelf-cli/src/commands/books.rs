use shelf_core::SearchField;

use crate::app::open_catalog;
use crate::cli::{AddArgs, Cli, ListArgs, RemoveArgs, SearchArgs, StatsArgs};
use crate::helpers::{collect_add_input, parse_output_format, OutputFormat};
use crate::output::{books_json, RemoveReceipt, StatsJson};
use crate::ui::render::{badge, book_line, book_table, header, hint, kv, reading_bar};
use crate::ui::{Badge, UiContext};

pub fn handle_add(cli: &Cli, args: &AddArgs) -> anyhow::Result<()> {
    let new_book = collect_add_input(args)?;
    let (mut catalog, _) = open_catalog(cli)?;
    let title = new_book.title.clone();
    catalog.add(new_book)?;

    if !cli.quiet {
        let ctx = UiContext::from_env(false, None);
        println!(
            "{}",
            badge(
                &ctx,
                Badge::Ok,
                &format!("'{}' added to your library", title)
            )
        );
    }
    Ok(())
}

pub fn handle_remove(cli: &Cli, args: &RemoveArgs) -> anyhow::Result<()> {
    let (mut catalog, _) = open_catalog(cli)?;
    let removed = catalog.remove(&args.title)?;

    if args.json {
        let receipt = RemoveReceipt::new(&args.title, removed);
        println!("{}", serde_json::to_string_pretty(&receipt)?);
        return Ok(());
    }

    if cli.quiet {
        return Ok(());
    }
    let ctx = UiContext::from_env(false, None);
    if removed > 0 {
        println!(
            "{}",
            badge(
                &ctx,
                Badge::Ok,
                &format!("'{}' removed from your library", args.title)
            )
        );
    } else {
        println!(
            "{}",
            badge(
                &ctx,
                Badge::Warn,
                &format!("Book titled '{}' not found", args.title)
            )
        );
    }
    Ok(())
}

pub fn handle_search(cli: &Cli, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }

    let (catalog, _) = open_catalog(cli)?;
    let field: SearchField = args.by.into();
    let hits = catalog.search(field, &args.query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&books_json(&hits))?);
        return Ok(());
    }

    let ctx = UiContext::from_env(false, args.format.as_deref());
    if hits.is_empty() {
        if !cli.quiet {
            println!("{}", badge(&ctx, Badge::Warn, "No matching books found."));
        }
        return Ok(());
    }

    if !cli.quiet {
        let context = format!("{} ~ \"{}\"", field.as_str(), args.query);
        println!("{}", header(&ctx, "search", Some(&context)));
        println!(
            "{}",
            badge(
                &ctx,
                Badge::Ok,
                &format!("Found {} matching book(s)", hits.len())
            )
        );
    }
    print_books(&ctx, format, &hits);
    Ok(())
}

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }

    let (catalog, _) = open_catalog(cli)?;
    let books: Vec<_> = catalog.books().iter().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&books_json(&books))?);
        return Ok(());
    }

    let ctx = UiContext::from_env(false, args.format.as_deref());
    if books.is_empty() {
        if !cli.quiet {
            println!(
                "{}",
                badge(&ctx, Badge::Info, "Your library is empty. Add some books!")
            );
            println!("{}", hint(&ctx, "shelf add"));
        }
        return Ok(());
    }

    if !cli.quiet {
        println!("{}", header(&ctx, "list", None));
        println!("{}", kv(&ctx, "Books", &books.len().to_string()));
    }
    print_books(&ctx, format, &books);
    Ok(())
}

pub fn handle_stats(cli: &Cli, args: &StatsArgs) -> anyhow::Result<()> {
    let (catalog, _) = open_catalog(cli)?;
    let stats = catalog.stats();

    if args.json {
        let output = StatsJson::from(stats);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let ctx = UiContext::from_env(false, None);
    if !cli.quiet {
        println!("{}", header(&ctx, "stats", None));
    }
    println!("{}", kv(&ctx, "Total Books", &stats.total.to_string()));
    println!("{}", kv(&ctx, "Books Read", &stats.read.to_string()));
    println!("{}", kv(&ctx, "Books Unread", &stats.unread.to_string()));
    if ctx.mode.is_pretty() {
        println!("{}", reading_bar(&ctx, stats.progress()));
    } else {
        println!(
            "{}",
            kv(&ctx, "Reading Progress", &format!("{:.1}%", stats.percent))
        );
    }
    Ok(())
}

fn print_books(ctx: &UiContext, format: Option<OutputFormat>, books: &[&shelf_core::Book]) {
    let default = if ctx.mode.is_pretty() {
        OutputFormat::Table
    } else {
        OutputFormat::Plain
    };
    match format.unwrap_or(default) {
        OutputFormat::Table => println!("{}", book_table(ctx, books)),
        OutputFormat::Plain => {
            for book in books {
                println!("{}", book_line(book));
            }
        }
    }
}
