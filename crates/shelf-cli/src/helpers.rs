use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use shelf_core::NewBook;

use crate::cli::AddArgs;

pub const YEAR_MIN: i32 = 1000;
pub const YEAR_MAX: i32 = 9999;

/// Output format for list/search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

pub fn validate_year(year: i32) -> anyhow::Result<i32> {
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(year)
    } else {
        Err(anyhow::anyhow!(
            "Publication year must be between {} and {}",
            YEAR_MIN,
            YEAR_MAX
        ))
    }
}

fn require_non_empty(label: &str, value: &str) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("{} must not be empty", label));
    }
    Ok(trimmed.to_string())
}

/// Collect the add inputs from flags, prompting for anything missing when
/// interactive. With `--no-input` (or no TTY) every text field must come
/// from a flag; the read status defaults to unread.
pub fn collect_add_input(args: &AddArgs) -> anyhow::Result<NewBook> {
    let interactive = std::io::stdin().is_terminal() && !args.no_input;

    let title = resolve_text_field("Book title", "--title", args.title.as_deref(), interactive)?;
    let author = resolve_text_field("Author", "--author", args.author.as_deref(), interactive)?;
    let year = match args.year {
        Some(year) => validate_year(year)?,
        None if interactive => prompt_year()?,
        None => return Err(missing_field_error("--year")),
    };
    let genre = resolve_text_field("Genre", "--genre", args.genre.as_deref(), interactive)?;

    let read = if args.read {
        true
    } else if interactive {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Have you read this book?")
            .default(false)
            .interact()?
    } else {
        false
    };

    Ok(NewBook::new(title, author, year, genre).read(read))
}

fn resolve_text_field(
    prompt: &str,
    flag: &str,
    value: Option<&str>,
    interactive: bool,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return require_non_empty(prompt, value);
    }
    if !interactive {
        return Err(missing_field_error(flag));
    }
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|candidate: &String| {
            if candidate.trim().is_empty() {
                Err("value must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    require_non_empty(prompt, &input)
}

fn prompt_year() -> anyhow::Result<i32> {
    let year: i32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Publication year")
        .validate_with(|candidate: &i32| {
            if (YEAR_MIN..=YEAR_MAX).contains(candidate) {
                Ok(())
            } else {
                Err("year must be between 1000 and 9999")
            }
        })
        .interact_text()?;
    Ok(year)
}

fn missing_field_error(flag: &str) -> anyhow::Error {
    anyhow::anyhow!("Missing {} (required when prompts are disabled)", flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("yaml")).is_err());
    }

    #[test]
    fn test_validate_year_bounds() {
        assert!(validate_year(999).is_err());
        assert_eq!(validate_year(1000).unwrap(), 1000);
        assert_eq!(validate_year(9999).unwrap(), 9999);
        assert!(validate_year(10000).is_err());
    }

    #[test]
    fn test_require_non_empty_trims() {
        assert_eq!(require_non_empty("Title", "  Dune  ").unwrap(), "Dune");
        assert!(require_non_empty("Title", "   ").is_err());
    }
}
