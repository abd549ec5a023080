//! Table download with progress reporting.
//!
//! Tables are fetched as CSV from the wago.tools DB2 export and streamed to
//! the raw cache directory.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::SourceTable;
use crate::error::{IngestError, Result};

/// Default upstream endpoint.
pub const DEFAULT_BASE_URL: &str = "https://wago.tools/db2";

const CHUNK_SIZE: usize = 8192;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// User agent string for download requests.
const USER_AGENT_VALUE: &str = concat!("wago-extract/", env!("CARGO_PKG_VERSION"));

/// Progress information during a download operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Number of bytes downloaded so far.
    pub downloaded: u64,
    /// Total size from `Content-Length`, when the server sent one.
    pub total: Option<u64>,
}

impl DownloadProgress {
    #[must_use]
    pub fn downloaded_display(&self) -> String {
        format_bytes(self.downloaded)
    }
}

/// Formats a byte count in human-readable form.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Blocking downloader for source tables.
pub struct TableDownloader {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TableDownloader {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT_VALUE)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// CSV export URL of a table.
    pub fn table_url(&self, table: SourceTable) -> String {
        format!("{}/{}/csv", self.base_url.trim_end_matches('/'), table.name())
    }

    /// Downloads `table` into `dir`, returning the written path.
    ///
    /// The body is written to a `.part` file first and renamed once complete.
    pub fn download<F>(&self, table: SourceTable, dir: &Path, mut on_progress: F) -> Result<PathBuf>
    where
        F: FnMut(DownloadProgress),
    {
        let url = self.table_url(table);
        let target = dir.join(table.file_name());
        let partial = dir.join(format!("{}.part", table.file_name()));
        tracing::info!(table = %table, url = %url, "downloading table");

        let mut response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        let total = response.content_length().filter(|len| *len > 0);
        on_progress(DownloadProgress {
            downloaded: 0,
            total,
        });

        let downloaded = stream_to_file(&mut response, &partial, total, &mut on_progress)?;

        if let Err(e) = std::fs::rename(&partial, &target) {
            discard_partial(&partial);
            return Err(IngestError::FileWrite {
                path: target,
                source: e,
            });
        }
        tracing::info!(
            table = %table,
            size = %format_bytes(downloaded),
            "download complete"
        );
        Ok(target)
    }
}

/// Copies `body` into `partial`, returning the byte count. On failure the
/// partial file is removed.
fn stream_to_file<R, F>(
    body: &mut R,
    partial: &Path,
    total: Option<u64>,
    on_progress: &mut F,
) -> Result<u64>
where
    R: Read,
    F: FnMut(DownloadProgress),
{
    let result = copy_chunks(body, partial, total, on_progress);
    if result.is_err() {
        discard_partial(partial);
    }
    result
}

fn copy_chunks<R, F>(
    body: &mut R,
    partial: &Path,
    total: Option<u64>,
    on_progress: &mut F,
) -> Result<u64>
where
    R: Read,
    F: FnMut(DownloadProgress),
{
    let write_err = |e| IngestError::FileWrite {
        path: partial.to_path_buf(),
        source: e,
    };
    let mut file = File::create(partial).map_err(write_err)?;
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut downloaded = 0u64;
    loop {
        let read = body
            .read(&mut buffer)
            .map_err(|e| IngestError::Network(e.to_string()))?;
        if read == 0 {
            break;
        }
        file.write_all(&buffer[..read]).map_err(write_err)?;
        downloaded += read as u64;
        on_progress(DownloadProgress { downloaded, total });
    }
    file.flush().map_err(write_err)?;
    Ok(downloaded)
}

fn discard_partial(partial: &Path) {
    if let Err(error) = std::fs::remove_file(partial)
        && error.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %partial.display(), %error, "could not remove partial download");
    }
}
