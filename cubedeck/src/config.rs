//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use cubedeck_core::{SortMode, DEFAULT_PICKER_COLOUR};

/// Build a card cube from several decklists and see which decks share cards.
#[derive(Debug, Clone, Parser)]
#[command(name = "cubedeck", version, about)]
pub struct Config {
    /// Decklist .txt files (or directories of them) to load on start-up
    pub files: Vec<PathBuf>,

    /// JSON deck document to import on start-up
    #[arg(long, env = "CUBEDECK_IMPORT")]
    pub import: Option<PathBuf>,

    /// Where the export action writes the JSON document
    #[arg(long, env = "CUBEDECK_EXPORT", default_value = "cube.json")]
    pub export: PathBuf,

    /// Initial card ordering: shared, alpha or decks
    #[arg(long, env = "CUBEDECK_SORT", default_value = "shared", value_parser = parse_sort_mode)]
    pub sort: SortMode,

    /// Default swatch colour for new decks
    #[arg(long, env = "CUBEDECK_COLOUR", default_value = DEFAULT_PICKER_COLOUR)]
    pub colour: String,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "CUBEDECK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "CUBEDECK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

fn parse_sort_mode(value: &str) -> Result<SortMode, String> {
    value.parse().map_err(|e: cubedeck_core::ConfigError| e.to_string())
}
