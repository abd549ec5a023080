//! Source table ingestion for WoW item extraction.
//!
//! This crate knows the five upstream DB2 tables, downloads them from
//! wago.tools into a local cache and reads them back as rows keyed by column
//! name.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wago_ingest::{SourceTable, TablePaths, TableReader};
//!
//! let paths = TablePaths::in_dir(Path::new("data/raw"));
//! let table = SourceTable::Item;
//! for row in TableReader::open(paths.path(table), table.required_columns())? {
//!     let row = row?;
//!     println!("{:?}", row.get("ClassID"));
//! }
//! ```

mod catalog;
mod download;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use table::{ColumnIndex, RawRow, TableReader, count_data_rows, normalize_header, parse_i64};

// === Source Tables ===
pub use catalog::{SourceTable, TablePaths};

// === Download ===
pub use download::{DEFAULT_BASE_URL, DownloadProgress, TableDownloader, format_bytes};
