//! End-to-end CLI flows: spawn the built binary against temp library files.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shelf"))
}

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("shelf_{}_{}_{}", prefix, std::process::id(), nanos));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn shelf(library: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("SHELF_LIBRARY", library)
        .env("TERM", "dumb")
        .env_remove("SHELF_CONFIG")
        .stdin(Stdio::null())
        .output()
        .expect("run shelf")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn add_book(library: &Path, title: &str, author: &str, year: &str, read: bool) {
    let mut args = vec![
        "add", "--no-input", "--title", title, "--author", author, "--year", year, "--genre",
        "Fiction",
    ];
    if read {
        args.push("--read");
    }
    let output = shelf(library, &args);
    assert!(output.status.success(), "add failed: {}", stderr(&output));
}

#[test]
fn add_list_search_remove_stats_flow() {
    let dir = temp_dir("flow");
    let library = dir.join("library.json");

    // Add
    let output = shelf(
        &library,
        &[
            "add",
            "--no-input",
            "--title",
            "Dune",
            "--author",
            "Frank Herbert",
            "--year",
            "1965",
            "--genre",
            "Sci-Fi",
            "--read",
        ],
    );
    assert!(output.status.success(), "add failed: {}", stderr(&output));
    assert!(stdout(&output).contains("'Dune' added to your library"));
    assert!(library.exists());

    // List as JSON
    let output = shelf(&library, &["list", "--json"]);
    assert!(output.status.success());
    let books: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let books = books.as_array().expect("array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["author"], "Frank Herbert");
    assert_eq!(books[0]["year"], 1965);
    assert_eq!(books[0]["genre"], "Sci-Fi");
    assert_eq!(books[0]["read"], true);

    // Search by author substring
    let output = shelf(&library, &["search", "herb", "--by", "author", "--json"]);
    assert!(output.status.success());
    let hits: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(hits.as_array().expect("array").len(), 1);

    // Search miss is informational, not a failure
    let output = shelf(&library, &["search", "tolkien", "--by", "author"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No matching books found."));

    // Remove with a case mismatch still removes
    let output = shelf(&library, &["remove", "dune"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("'dune' removed from your library"));

    // Removing again reports not-found, still exit 0
    let output = shelf(&library, &["remove", "dune"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("not found"));

    // Stats on the now-empty library are all zero
    let output = shelf(&library, &["stats", "--json"]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["read"], 0);
    assert_eq!(stats["unread"], 0);
    assert_eq!(stats["percent"], 0.0);
    assert_eq!(stats["progress"], 0.0);
}

#[test]
fn stats_reports_percent_and_progress() {
    let dir = temp_dir("stats");
    let library = dir.join("library.json");

    add_book(&library, "a", "w", "2000", true);
    add_book(&library, "b", "x", "2001", true);
    add_book(&library, "c", "y", "2002", true);
    add_book(&library, "d", "z", "2003", false);

    let output = shelf(&library, &["stats", "--json"]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(stats["total"], 4);
    assert_eq!(stats["read"], 3);
    assert_eq!(stats["unread"], 1);
    assert_eq!(stats["percent"], 75.0);
    assert_eq!(stats["progress"], 0.75);

    let output = shelf(&library, &["stats"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("total_books=4"));
    assert!(text.contains("books_read=3"));
    assert!(text.contains("books_unread=1"));
    assert!(text.contains("reading_progress=75.0%"));
}

#[test]
fn remove_json_receipt_keeps_count() {
    let dir = temp_dir("receipt");
    let library = dir.join("library.json");

    add_book(&library, "Dune", "Frank Herbert", "1965", false);
    add_book(&library, "DUNE", "Frank Herbert", "1965", false);

    let output = shelf(&library, &["remove", "dune", "--json"]);
    assert!(output.status.success());
    let receipt: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(receipt["status"], "removed");
    assert_eq!(receipt["removed"], 2);

    let output = shelf(&library, &["remove", "dune", "--json"]);
    let receipt: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(receipt["status"], "not_found");
    assert_eq!(receipt["removed"], 0);
}

#[test]
fn year_out_of_range_is_rejected_before_the_catalog_changes() {
    let dir = temp_dir("year");
    let library = dir.join("library.json");

    let output = shelf(
        &library,
        &[
            "add", "--no-input", "--title", "t", "--author", "a", "--year", "99", "--genre", "g",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Publication year"));
    assert!(!library.exists());
}

#[test]
fn missing_required_flag_without_prompts_is_an_error() {
    let dir = temp_dir("missing");
    let library = dir.join("library.json");

    let output = shelf(&library, &["add", "--no-input", "--title", "t"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--author"));
}

#[test]
fn empty_library_list_is_informational_and_creates_no_file() {
    let dir = temp_dir("empty");
    let library = dir.join("library.json");

    let output = shelf(&library, &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Your library is empty"));
    assert!(!library.exists());
}

#[test]
fn malformed_library_file_is_fatal() {
    let dir = temp_dir("malformed");
    let library = dir.join("library.json");
    std::fs::write(&library, "{ not json ]").expect("write");

    let output = shelf(&library, &["list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("malformed"));
}

#[test]
fn quiet_add_prints_nothing() {
    let dir = temp_dir("quiet");
    let library = dir.join("library.json");

    let output = shelf(
        &library,
        &[
            "add", "--quiet", "--no-input", "--title", "t", "--author", "a", "--year", "2000",
            "--genre", "g",
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(library.exists());
}

#[test]
fn library_path_comes_from_config_when_no_flag_or_env() {
    let dir = temp_dir("config");
    let config_home = dir.join("config");
    let library = dir.join("from-config.json");
    let config_path = config_home.join("shelf").join("config.toml");
    std::fs::create_dir_all(config_path.parent().expect("parent")).expect("create config dir");
    std::fs::write(
        &config_path,
        format!("[library]\npath = \"{}\"\n", library.display()),
    )
    .expect("write config");

    let output = Command::new(bin())
        .args([
            "add", "--no-input", "--title", "t", "--author", "a", "--year", "2000", "--genre",
            "g",
        ])
        .env("XDG_CONFIG_HOME", &config_home)
        .env("TERM", "dumb")
        .env_remove("SHELF_LIBRARY")
        .env_remove("SHELF_CONFIG")
        .stdin(Stdio::null())
        .output()
        .expect("run shelf");
    assert!(output.status.success(), "add failed: {}", stderr(&output));
    assert!(library.exists());
}

#[test]
fn list_plain_lines_are_stable() {
    let dir = temp_dir("plain");
    let library = dir.join("library.json");

    add_book(&library, "Dune", "Frank Herbert", "1965", true);

    let output = shelf(&library, &["list", "--format", "plain", "--quiet"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "Dune | Frank Herbert | 1965 | Fiction | read"
    );
}
