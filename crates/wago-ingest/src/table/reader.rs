//! Streaming reader for header-first CSV tables.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

use super::row::{ColumnIndex, RawRow};

/// Reads a source table row by row.
///
/// The header is read and validated on open; rows are produced lazily so the
/// primary table can be streamed without loading it.
pub struct TableReader {
    path: PathBuf,
    columns: Arc<ColumnIndex>,
    reader: csv::Reader<BufReader<File>>,
    record: StringRecord,
}

impl TableReader {
    /// Opens `path` and checks that every column in `required` exists in the header.
    pub fn open(path: &Path, required: &[&str]) -> Result<Self> {
        let file = open_file(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));
        let headers = reader
            .headers()
            .map_err(|e| csv_error(path, &e))?
            .clone();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
        let columns = ColumnIndex::new(headers.iter());
        for column in required {
            if !columns.contains(column) {
                return Err(IngestError::MissingColumn {
                    column: (*column).to_string(),
                    path: path.to_path_buf(),
                });
            }
        }
        tracing::debug!(
            path = %path.display(),
            columns = columns.names().len(),
            "opened table"
        );
        Ok(Self {
            path: path.to_path_buf(),
            columns: Arc::new(columns),
            reader,
            record: StringRecord::new(),
        })
    }

    pub fn columns(&self) -> &[String] {
        self.columns.names()
    }
}

impl Iterator for TableReader {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(RawRow::new(
                Arc::clone(&self.columns),
                self.record.clone(),
            ))),
            Ok(false) => None,
            Err(error) => Some(Err(csv_error(&self.path, &error))),
        }
    }
}

/// Counts data records (header excluded), for progress totals.
pub fn count_data_rows(path: &Path) -> Result<u64> {
    let file = open_file(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));
    let mut count = 0u64;
    for record in reader.byte_records() {
        record.map_err(|e| csv_error(path, &e))?;
        count += 1;
    }
    Ok(count)
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
