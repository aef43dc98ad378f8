use std::path::PathBuf;

use anyhow::Context;
use shelf_core::{Catalog, LoadOrigin};

use crate::cli::Cli;
use crate::config::{default_config_path, default_library_path, read_config};

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHELF_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the library file path: `--library` flag (or `SHELF_LIBRARY` env,
/// handled by clap) wins, then the config file if one exists, then the
/// default data path. A missing config file is not an error here; a fresh
/// empty library is a valid first run.
pub fn resolve_library_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.library.clone() {
        return Ok(PathBuf::from(path));
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.library.path));
    }

    default_library_path()
}

pub fn open_catalog(cli: &Cli) -> anyhow::Result<(Catalog, LoadOrigin)> {
    let path = resolve_library_path(cli)?;
    let (catalog, origin) = Catalog::load(&path)
        .with_context(|| format!("Failed to open library at {}", path.display()))?;
    Ok((catalog, origin))
}
