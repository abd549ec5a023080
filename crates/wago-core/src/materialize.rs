//! Item record construction from a primary row and its indexed metadata.

use thiserror::Error;
use wago_ingest::{RawRow, parse_i64};
use wago_model::{
    ExpansionId, ItemClass, ItemId, ItemQuality, ItemRecord, ModelError, Taxonomy, sanitize_text,
};

/// Why a matching row produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("unknown item class id {0}")]
    UnknownClass(i64),

    #[error("unknown item quality id {0}")]
    UnknownQuality(i64),

    #[error("row has no usable ID")]
    MissingId,

    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

impl From<ModelError> for SkipReason {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownClass(id) => SkipReason::UnknownClass(id),
            ModelError::UnknownQuality(id) => SkipReason::UnknownQuality(id),
        }
    }
}

/// Builds the record for one primary-table row.
///
/// Class and quality must be known values. Numeric display fields default to
/// zero when blank, except `Stackable` which defaults to one. An expansion
/// outside the known set is kept as its raw id.
pub fn build(primary: &RawRow, taxonomy: Taxonomy, label: &str) -> Result<ItemRecord, SkipReason> {
    let id = primary
        .get_non_empty("ID")
        .and_then(parse_i64)
        .and_then(|value| ItemId::try_from(value).ok())
        .ok_or(SkipReason::MissingId)?;
    let class = ItemClass::try_from(taxonomy.class_id)?;
    let quality = ItemQuality::try_from(number(primary, "OverallQualityID", 0)?)?;

    Ok(ItemRecord {
        id,
        name: sanitize_text(primary.get("Display_lang").unwrap_or_default()),
        class,
        subclass_id: taxonomy.subclass_id,
        quality,
        item_level: number(primary, "ItemLevel", 0)?,
        required_level: number(primary, "RequiredLevel", 0)?,
        stackable: number(primary, "Stackable", 1)?,
        sell_price: number(primary, "SellPrice", 0)?,
        expansion: ExpansionId::from_raw(number(primary, "ExpansionID", 0)?),
        description: sanitize_text(primary.get("Description_lang").unwrap_or_default()),
        spell_category: label.to_string(),
    })
}

fn number(row: &RawRow, field: &'static str, default: i64) -> Result<i64, SkipReason> {
    match row.get_non_empty(field) {
        None => Ok(default),
        Some(value) => parse_i64(value).ok_or_else(|| SkipReason::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}
