use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::Catalog;
use tally_tui::{App, install_panic_hook};

/// Catalog shipped with the binary, used when no `--catalog` is given.
const DEFAULT_CATALOG: &str = include_str!("../data/items.json");

#[derive(Parser)]
#[command(name = "tally", about = "Budget-tracked shopping list")]
#[command(version)]
struct Cli {
    /// Path to a catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Write debug logs to tally.log
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is the alternate screen while the TUI runs, so logs go to a file
    if cli.verbose {
        let log = std::fs::File::create("tally.log").context("failed to create tally.log")?;
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(Mutex::new(log))
            .with_ansi(false)
            .init();
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::from_json_str(DEFAULT_CATALOG).context("built-in catalog is invalid")?,
    };
    tracing::info!(items = catalog.len(), "catalog loaded");

    install_panic_hook();
    let mut app = App::new(catalog);
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_parses() {
        let catalog = Catalog::from_json_str(DEFAULT_CATALOG).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn built_in_catalog_descriptions_are_unique_and_ordered() {
        let catalog = Catalog::from_json_str(DEFAULT_CATALOG).unwrap();
        let mut seen = std::collections::HashSet::new();
        for item in catalog.items() {
            assert!(seen.insert(item.description.clone()));
        }
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["tally", "--verbose", "--catalog", "items.json"]);
        assert!(cli.verbose);
        assert_eq!(cli.catalog, Some(PathBuf::from("items.json")));
    }
}
