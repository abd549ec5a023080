//! Error types for indexing and extraction.

use thiserror::Error;
use wago_ingest::{IngestError, SourceTable};

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A row lacks its primary key or a required taxonomy value.
    #[error("{table}: row {row} has no value for '{column}'")]
    MissingValue {
        table: SourceTable,
        column: &'static str,
        row: u64,
    },

    /// A primary key or taxonomy value is not an integer.
    #[error("{table}: row {row} has invalid {column} value '{value}'")]
    InvalidValue {
        table: SourceTable,
        column: &'static str,
        value: String,
        row: u64,
    },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidValue {
            table: SourceTable::Item,
            column: "ClassID",
            value: "abc".to_string(),
            row: 3,
        };
        assert_eq!(err.to_string(), "Item: row 3 has invalid ClassID value 'abc'");
    }
}
