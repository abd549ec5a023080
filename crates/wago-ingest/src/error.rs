//! Error types for source table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching or reading source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source table not found on disk.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a downloaded table.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found in the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === Network Errors ===
    /// Request or transfer failed.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("download of {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
