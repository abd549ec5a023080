//! In-memory relational index over the auxiliary item tables.
//!
//! Four passes, each linear in its table:
//!
//! 1. `Item`: item id to taxonomy (class, subclass)
//! 2. `ItemEffect`: effect id to spell category id, only where one is set
//! 3. `SpellCategory`: spell category id to label
//! 4. `ItemXItemEffect`: item id to label, through the maps of passes 2 and 3
//!
//! The primary table is not indexed; it is streamed by the pipeline.

use std::collections::HashMap;

use tracing::{debug, info};
use wago_ingest::{RawRow, SourceTable, TablePaths, TableReader, parse_i64};
use wago_model::{ItemId, Taxonomy};

use crate::error::{CoreError, Result};
use crate::progress::{INDEX_STEPS, Phase, ProgressReporter};

/// Lookups needed while streaming the primary table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationalIndex {
    taxonomy: HashMap<ItemId, Taxonomy>,
    labels: HashMap<ItemId, String>,
}

impl RelationalIndex {
    /// Reads the four auxiliary tables under `paths` and builds the index.
    pub fn load(paths: &TablePaths, reporter: &mut dyn ProgressReporter) -> Result<Self> {
        let open = |table: SourceTable| TableReader::open(paths.path(table), table.required_columns());
        Self::build(
            open(SourceTable::Item)?,
            open(SourceTable::ItemEffect)?,
            open(SourceTable::SpellCategory)?,
            open(SourceTable::ItemXItemEffect)?,
            reporter,
        )
    }

    /// Builds the index from already opened row sources.
    pub fn build<A, B, C, D>(
        item_rows: A,
        effect_rows: B,
        category_rows: C,
        join_rows: D,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<Self>
    where
        A: IntoIterator<Item = wago_ingest::Result<RawRow>>,
        B: IntoIterator<Item = wago_ingest::Result<RawRow>>,
        C: IntoIterator<Item = wago_ingest::Result<RawRow>>,
        D: IntoIterator<Item = wago_ingest::Result<RawRow>>,
    {
        reporter.phase_started(Phase::Indexing, Some(INDEX_STEPS));

        let taxonomy = index_taxonomy(item_rows)?;
        reporter.advance(1);
        let effects = index_effect_categories(effect_rows)?;
        reporter.advance(1);
        let names = index_category_names(category_rows)?;
        reporter.advance(1);
        let labels = resolve_item_labels(join_rows, &effects, &names)?;
        reporter.advance(1);

        reporter.phase_finished(Phase::Indexing);
        info!(
            items = taxonomy.len(),
            effects = effects.len(),
            spell_categories = names.len(),
            labelled_items = labels.len(),
            "relational index built"
        );
        Ok(Self { taxonomy, labels })
    }

    pub fn taxonomy(&self, id: ItemId) -> Option<Taxonomy> {
        self.taxonomy.get(&id).copied()
    }

    /// Resolved spell category label, empty when the join did not resolve.
    pub fn label(&self, id: ItemId) -> &str {
        self.labels.get(&id).map(String::as_str).unwrap_or("")
    }
}

/// Pass 1: item id to taxonomy. Both taxonomy fields are required.
pub fn index_taxonomy<I>(rows: I) -> Result<HashMap<ItemId, Taxonomy>>
where
    I: IntoIterator<Item = wago_ingest::Result<RawRow>>,
{
    let table = SourceTable::Item;
    let mut index = HashMap::new();
    for (line, row) in numbered(rows) {
        let row = row?;
        let id = required_item_id(&row, table, "ID", line)?;
        let class_id = required_int(&row, table, "ClassID", line)?;
        let subclass_id = required_int(&row, table, "SubclassID", line)?;
        index.insert(
            id,
            Taxonomy {
                class_id,
                subclass_id,
            },
        );
    }
    Ok(index)
}

/// Pass 2: effect id to spell category id. Effects without a category (empty or 0) are left out.
pub fn index_effect_categories<I>(rows: I) -> Result<HashMap<i64, i64>>
where
    I: IntoIterator<Item = wago_ingest::Result<RawRow>>,
{
    let table = SourceTable::ItemEffect;
    let mut index = HashMap::new();
    for (line, row) in numbered(rows) {
        let row = row?;
        let id = required_int(&row, table, "ID", line)?;
        match foreign_key(&row, "SpellCategoryID") {
            Some(category) if category != 0 => {
                index.insert(id, category);
            }
            _ => {}
        }
    }
    Ok(index)
}

/// Pass 3: spell category id to label.
pub fn index_category_names<I>(rows: I) -> Result<HashMap<i64, String>>
where
    I: IntoIterator<Item = wago_ingest::Result<RawRow>>,
{
    let table = SourceTable::SpellCategory;
    let mut index = HashMap::new();
    for (line, row) in numbered(rows) {
        let row = row?;
        let id = required_int(&row, table, "ID", line)?;
        let name = row.get("Name_lang").unwrap_or_default().to_string();
        index.insert(id, name);
    }
    Ok(index)
}

/// Pass 4: item id to label. Both join columns are required; only pairs where
/// both hops resolve are recorded, and a later join row for the same item
/// replaces an earlier one.
pub fn resolve_item_labels<I>(
    rows: I,
    effects: &HashMap<i64, i64>,
    names: &HashMap<i64, String>,
) -> Result<HashMap<ItemId, String>>
where
    I: IntoIterator<Item = wago_ingest::Result<RawRow>>,
{
    let table = SourceTable::ItemXItemEffect;
    let mut labels = HashMap::new();
    for (line, row) in numbered(rows) {
        let row = row?;
        let item_id = required_item_id(&row, table, "ItemID", line)?;
        let effect_id = required_int(&row, table, "ItemEffectID", line)?;
        if let Some(name) = effects.get(&effect_id).and_then(|category| names.get(category)) {
            labels.insert(item_id, name.clone());
        }
    }
    Ok(labels)
}

/// Pairs rows with their 1-based data line number.
fn numbered<I>(rows: I) -> impl Iterator<Item = (u64, wago_ingest::Result<RawRow>)>
where
    I: IntoIterator<Item = wago_ingest::Result<RawRow>>,
{
    (1u64..).zip(rows)
}

pub(crate) fn required_int(
    row: &RawRow,
    table: SourceTable,
    column: &'static str,
    line: u64,
) -> Result<i64> {
    let value = row.get_non_empty(column).ok_or(CoreError::MissingValue {
        table,
        column,
        row: line,
    })?;
    parse_i64(value).ok_or_else(|| CoreError::InvalidValue {
        table,
        column,
        value: value.to_string(),
        row: line,
    })
}

pub(crate) fn required_item_id(
    row: &RawRow,
    table: SourceTable,
    column: &'static str,
    line: u64,
) -> Result<ItemId> {
    let value = required_int(row, table, column, line)?;
    ItemId::try_from(value).map_err(|_| CoreError::InvalidValue {
        table,
        column,
        value: value.to_string(),
        row: line,
    })
}

/// Optional reference column; blank or unparsable values count as absent.
fn foreign_key(row: &RawRow, column: &str) -> Option<i64> {
    let value = row.get_non_empty(column)?;
    let parsed = parse_i64(value);
    if parsed.is_none() {
        debug!(column, value, "ignoring non-numeric reference");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoopReporter;

    fn rows(pairs: &[&[(&'static str, &'static str)]]) -> Vec<wago_ingest::Result<RawRow>> {
        pairs
            .iter()
            .map(|row| Ok(RawRow::from_pairs(row.iter().copied())))
            .collect()
    }

    #[test]
    fn test_effects_without_category_are_skipped() {
        let index = index_effect_categories(rows(&[
            &[("ID", "1"), ("SpellCategoryID", "88")],
            &[("ID", "2"), ("SpellCategoryID", "")],
            &[("ID", "3"), ("SpellCategoryID", "0")],
            &[("ID", "4")],
        ]))
        .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&1), Some(&88));
    }

    #[test]
    fn test_missing_primary_key_is_fatal() {
        let err = index_taxonomy(rows(&[
            &[("ID", "1"), ("ClassID", "0"), ("SubclassID", "1")],
            &[("ID", ""), ("ClassID", "0"), ("SubclassID", "1")],
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingValue {
                column: "ID",
                row: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_non_integer_class_is_fatal() {
        let err = index_taxonomy(rows(&[&[("ID", "1"), ("ClassID", "x"), ("SubclassID", "1")]]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { column: "ClassID", .. }));
    }

    #[test]
    fn test_join_needs_both_hops() {
        let effects = HashMap::from([(10, 88), (11, 99)]);
        let names = HashMap::from([(88, "Healing Potion".to_string())]);
        let labels = resolve_item_labels(
            rows(&[
                &[("ItemID", "500"), ("ItemEffectID", "10")],
                &[("ItemID", "501"), ("ItemEffectID", "11")],
                &[("ItemID", "502"), ("ItemEffectID", "12")],
            ]),
            &effects,
            &names,
        )
        .unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get(&500).map(String::as_str), Some("Healing Potion"));
    }

    #[test]
    fn test_blank_join_key_is_fatal() {
        let effects = HashMap::from([(10, 88)]);
        let names = HashMap::from([(88, "Healing Potion".to_string())]);
        let err = resolve_item_labels(
            rows(&[
                &[("ItemID", "500"), ("ItemEffectID", "10")],
                &[("ItemID", ""), ("ItemEffectID", "10")],
            ]),
            &effects,
            &names,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingValue {
                table: SourceTable::ItemXItemEffect,
                column: "ItemID",
                row: 2,
            }
        ));
    }

    #[test]
    fn test_non_numeric_join_key_is_fatal() {
        let err = resolve_item_labels(
            rows(&[&[("ItemID", "500"), ("ItemEffectID", "ten")]]),
            &HashMap::new(),
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidValue {
                column: "ItemEffectID",
                row: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_last_join_row_wins() {
        let effects = HashMap::from([(10, 1), (11, 2)]);
        let names = HashMap::from([(1, "Food".to_string()), (2, "Drink".to_string())]);
        let labels = resolve_item_labels(
            rows(&[
                &[("ItemID", "7"), ("ItemEffectID", "10")],
                &[("ItemID", "7"), ("ItemEffectID", "11")],
            ]),
            &effects,
            &names,
        )
        .unwrap();
        assert_eq!(labels.get(&7).map(String::as_str), Some("Drink"));
    }

    #[test]
    fn test_unresolved_label_is_empty() {
        let index = RelationalIndex::build(
            rows(&[&[("ID", "1"), ("ClassID", "0"), ("SubclassID", "5")]]),
            rows(&[]),
            rows(&[]),
            rows(&[]),
            &mut NoopReporter,
        )
        .unwrap();
        assert_eq!(index.label(1), "");
        assert_eq!(
            index.taxonomy(1),
            Some(Taxonomy {
                class_id: 0,
                subclass_id: 5
            })
        );
        assert_eq!(index.taxonomy(2), None);
    }

    proptest::proptest! {
        #[test]
        fn taxonomy_index_keeps_last_row_per_id(
            ids in proptest::collection::vec(1u32..50, 0..40)
        ) {
            let owned: Vec<(String, String)> = ids
                .iter()
                .enumerate()
                .map(|(line, id)| (id.to_string(), line.to_string()))
                .collect();
            let rows = owned.iter().map(|(id, subclass)| {
                Ok(RawRow::from_pairs([
                    ("ID", id.as_str()),
                    ("ClassID", "0"),
                    ("SubclassID", subclass.as_str()),
                ]))
            });
            let index = index_taxonomy(rows).unwrap();

            let distinct: std::collections::HashSet<u32> = ids.iter().copied().collect();
            proptest::prop_assert_eq!(index.len(), distinct.len());
            for (line, id) in ids.iter().enumerate().rev() {
                if ids[line + 1..].contains(id) {
                    continue;
                }
                proptest::prop_assert_eq!(index[id].subclass_id, line as i64);
            }
        }
    }
}
