//! Extraction pipeline: index the auxiliary tables, stream the primary table,
//! match each row against the requested categories and group the records.
//!
//! # Example
//!
//! ```ignore
//! use wago_core::{CategoryRequest, NoopReporter, extract};
//! use wago_ingest::TablePaths;
//!
//! let paths = TablePaths::in_dir("data/raw".as_ref());
//! let requests = CategoryRequest::parse_all(["potions", "food"]);
//! let extraction = extract(&paths, &requests, &mut NoopReporter)?;
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info, info_span, warn};
use wago_ingest::{RawRow, SourceTable, TablePaths, TableReader, count_data_rows};
use wago_model::{CategoryKey, ItemRecord, normalize_key};

use crate::error::Result;
use crate::grouping::CategoryGroups;
use crate::index::{RelationalIndex, required_item_id};
use crate::matcher::matches;
use crate::materialize;
use crate::progress::{Phase, ProgressReporter};

/// Rows processed between progress updates.
const PROGRESS_BATCH: u64 = 1024;

/// A category asked for by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRequest {
    /// Output name: the user's spelling, lowercased with separators dropped
    /// (`Potions` and `potions` both give `potions`). Unrecognised input is
    /// only trimmed and lowercased, for reporting.
    pub name: String,
    /// `None` when no rule recognises the input; such requests match nothing
    /// and produce no output.
    pub key: Option<CategoryKey>,
}

impl CategoryRequest {
    pub fn parse(raw: &str) -> Self {
        let key = CategoryKey::parse(raw);
        let name = match key {
            Some(_) => normalize_key(raw),
            None => raw.trim().to_lowercase(),
        };
        Self { name, key }
    }

    /// Parses every input, dropping blanks and repeats. Two spellings of the
    /// same key count as a repeat; the first spelling names the output.
    pub fn parse_all<I, S>(raw: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requests: Vec<Self> = Vec::new();
        for value in raw {
            let request = Self::parse(value.as_ref());
            let repeated = requests.iter().any(|r| match (r.key, request.key) {
                (Some(seen), Some(key)) => seen == key,
                _ => r.name == request.name,
            });
            if request.name.is_empty() || repeated {
                continue;
            }
            requests.push(request);
        }
        requests
    }
}

/// Counters gathered while filtering the primary table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub rows_scanned: u64,
    /// Primary rows with no entry in the taxonomy table.
    pub rows_without_taxonomy: u64,
    /// Matching rows rejected by the materializer.
    pub rows_skipped: u64,
    /// Records per category name.
    pub matches: BTreeMap<String, usize>,
}

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub groups: CategoryGroups,
    pub stats: ExtractStats,
}

/// Runs a full extraction over the tables under `paths`.
pub fn extract(
    paths: &TablePaths,
    requests: &[CategoryRequest],
    reporter: &mut dyn ProgressReporter,
) -> Result<Extraction> {
    let span = info_span!("extract", categories = requests.len());
    let _guard = span.enter();

    let index = RelationalIndex::load(paths, reporter)?;

    let table = SourceTable::ItemSparse;
    let primary = paths.path(table);
    let total = count_data_rows(primary)?;
    let rows = TableReader::open(primary, table.required_columns())?;
    filter_rows(&index, rows, requests, Some(total), reporter)
}

/// Streams primary rows through the matcher and materializer.
///
/// A row without taxonomy is ignored. A row that matches but cannot be
/// materialized is skipped for every category and counted. Unrecognised
/// requests get no group.
pub fn filter_rows<I>(
    index: &RelationalIndex,
    rows: I,
    requests: &[CategoryRequest],
    total: Option<u64>,
    reporter: &mut dyn ProgressReporter,
) -> Result<Extraction>
where
    I: IntoIterator<Item = wago_ingest::Result<RawRow>>,
{
    for request in requests.iter().filter(|r| r.key.is_none()) {
        warn!(category = %request.name, "unknown category; skipped");
    }

    let mut groups = CategoryGroups::with_categories(
        requests
            .iter()
            .filter(|r| r.key.is_some())
            .map(|r| r.name.clone()),
    );
    let mut stats = ExtractStats::default();
    let mut pending = 0u64;

    reporter.phase_started(Phase::Filtering, total);
    for (line, row) in (1u64..).zip(rows) {
        let row = row?;
        let id = required_item_id(&row, SourceTable::ItemSparse, "ID", line)?;
        stats.rows_scanned += 1;
        pending += 1;
        if pending == PROGRESS_BATCH {
            reporter.advance(pending);
            pending = 0;
        }

        let Some(taxonomy) = index.taxonomy(id) else {
            stats.rows_without_taxonomy += 1;
            continue;
        };
        let label = index.label(id);

        let mut record: Option<ItemRecord> = None;
        for request in requests {
            let Some(key) = &request.key else {
                continue;
            };
            if !matches(key, taxonomy.class_id, taxonomy.subclass_id, label) {
                continue;
            }
            let item = match &record {
                Some(built) => built.clone(),
                None => match materialize::build(&row, taxonomy, label) {
                    Ok(built) => {
                        record = Some(built.clone());
                        built
                    }
                    Err(reason) => {
                        debug!(item_id = id, category = %request.name, %reason, "skipping item");
                        stats.rows_skipped += 1;
                        break;
                    }
                },
            };
            groups.push(&request.name, item);
        }
    }
    if pending > 0 {
        reporter.advance(pending);
    }
    reporter.phase_finished(Phase::Filtering);

    stats.matches = groups
        .iter()
        .map(|(name, records)| (name.to_string(), records.len()))
        .collect();
    info!(
        rows = stats.rows_scanned,
        without_taxonomy = stats.rows_without_taxonomy,
        skipped = stats.rows_skipped,
        records = groups.total_records(),
        "filtering complete"
    );
    Ok(Extraction { groups, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_names() {
        let requests =
            CategoryRequest::parse_all(["Potions", "potion", "WEAPONS", " ", "Unicorns", "unicorns"]);
        let names: Vec<&str> = requests.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["potions", "weapons", "unicorns"]);
        assert!(requests[2].key.is_none());
    }

    #[test]
    fn test_separators_are_dropped_from_names() {
        let requests = CategoryRequest::parse_all(["Axe-1H", "axe_1h"]);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "axe1h");
    }

    #[test]
    fn test_unknown_requests_get_no_group() {
        let index = RelationalIndex::default();
        let requests = CategoryRequest::parse_all(["potions", "hearth-stones", "../escape"]);
        let rows: Vec<wago_ingest::Result<RawRow>> = Vec::new();
        let extraction =
            filter_rows(&index, rows, &requests, None, &mut crate::progress::NoopReporter).unwrap();
        let names: Vec<&str> = extraction.groups.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["potions"]);
        assert_eq!(extraction.stats.matches.len(), 1);
    }
}
