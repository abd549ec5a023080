//! Per-category accumulation of materialized records.

use std::collections::BTreeMap;

use wago_model::ItemRecord;

/// Records grouped by category name, each group in encounter order.
///
/// Groups are not sorted here; exporters order records by id. An item can
/// sit in several groups at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: BTreeMap<String, Vec<ItemRecord>>,
}

impl CategoryGroups {
    /// Starts with an empty group for every name, so unmatched categories still report.
    pub fn with_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = names
            .into_iter()
            .map(|name| (name.into(), Vec::new()))
            .collect();
        Self { groups }
    }

    pub fn push(&mut self, category: &str, record: ItemRecord) {
        match self.groups.get_mut(category) {
            Some(records) => records.push(record),
            None => {
                self.groups.insert(category.to_string(), vec![record]);
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&[ItemRecord]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Groups in category name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ItemRecord])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Number of categories, including empty ones.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Records across all groups; an item in two groups counts twice.
    pub fn total_records(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
