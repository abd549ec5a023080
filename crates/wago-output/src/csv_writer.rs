//! Per-category CSV export.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use wago_model::ItemRecord;

use crate::error::{OutputError, Result};
use crate::lua::ensure_category_name;

/// Header order of every category file.
pub const CSV_COLUMNS: [&str; 10] = [
    "ID",
    "Name",
    "Class",
    "SubclassID",
    "Quality",
    "ItemLevel",
    "ReqLevel",
    "Expansion",
    "SpellCategory",
    "Description",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Class")]
    class: &'static str,
    #[serde(rename = "SubclassID")]
    subclass_id: i64,
    #[serde(rename = "Quality")]
    quality: &'static str,
    #[serde(rename = "ItemLevel")]
    item_level: i64,
    #[serde(rename = "ReqLevel")]
    required_level: i64,
    #[serde(rename = "Expansion")]
    expansion: String,
    #[serde(rename = "SpellCategory")]
    spell_category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
}

impl<'a> From<&'a ItemRecord> for CsvRow<'a> {
    fn from(record: &'a ItemRecord) -> Self {
        Self {
            id: record.id,
            name: &record.name,
            class: record.class.as_str(),
            subclass_id: record.subclass_id,
            quality: record.quality.as_str(),
            item_level: record.item_level,
            required_level: record.required_level,
            expansion: record.expansion.label(),
            spell_category: &record.spell_category,
            description: &record.description,
        }
    }
}

/// Path of the CSV file for `category` under `dir`.
pub fn csv_path(dir: &Path, category: &str) -> PathBuf {
    dir.join(format!("{category}.csv"))
}

/// Writes `<category>.csv` with records ordered by id.
///
/// Nothing is written for an empty category and `None` is returned. A
/// category name that is not a plain identifier is rejected.
pub fn write_category_csv(
    dir: &Path,
    category: &str,
    records: &[ItemRecord],
) -> Result<Option<PathBuf>> {
    ensure_category_name(category)?;
    if records.is_empty() {
        debug!(category, "no records; CSV skipped");
        return Ok(None);
    }
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = csv_path(dir, category);
    let csv_err = |source| OutputError::Csv {
        path: path.clone(),
        source,
    };
    let mut writer = csv::Writer::from_path(&path).map_err(csv_err)?;
    for record in sorted_by_id(records) {
        writer.serialize(CsvRow::from(record)).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(category, rows = records.len(), path = %path.display(), "CSV written");
    Ok(Some(path))
}

pub(crate) fn sorted_by_id(records: &[ItemRecord]) -> Vec<&ItemRecord> {
    let mut sorted: Vec<&ItemRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.id);
    sorted
}
