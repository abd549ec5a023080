//! CLI argument definitions for the item extractor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wago-extract",
    version,
    about = "Wago WoW Data Extractor - ETL for Blizzard DB2 item data",
    long_about = "Download item tables from wago.tools, join them in memory and export\n\
                  the requested categories as CSV, optionally with a Lua table module\n\
                  for addon use."
)]
pub struct Cli {
    /// Categories to extract: semantic keys (food, drinks, potions), item
    /// classes (WEAPON, ARMOR) or subclasses (PLATE, AXE1H).
    #[arg(short = 'c', long = "categories", value_name = "KEY", num_args = 1..)]
    pub categories: Vec<String>,

    /// Target directory for processed files.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = "data/processed")]
    pub output_dir: PathBuf,

    /// Local cache directory for the upstream CSV tables.
    #[arg(short = 'r', long = "raw-dir", value_name = "DIR", default_value = "data/raw")]
    pub raw_dir: PathBuf,

    /// Generate a Lua module next to the CSV files.
    #[arg(short = 'l', long = "lua")]
    pub lua: bool,

    /// Global table name used in Lua output.
    #[arg(short = 'n', long = "namespace", default_value = "MyAddon")]
    pub namespace: String,

    /// Write one .lua file per category instead of a merged data.lua.
    #[arg(long = "split-lua")]
    pub split_lua: bool,

    /// List the available category keys and exit.
    #[arg(long = "list")]
    pub list: bool,

    /// Shortcut for `--categories food`.
    #[arg(long = "food")]
    pub food: bool,

    /// Shortcut for `--categories drinks`.
    #[arg(long = "drinks")]
    pub drinks: bool,

    /// Shortcut for `--categories potions`.
    #[arg(long = "potions")]
    pub potions: bool,

    /// Use the cached tables in the raw directory instead of downloading.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Base URL of the DB2 CSV export.
    #[arg(long = "base-url", value_name = "URL", default_value = wago_ingest::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
