//! Raw table rows keyed by column name.

use std::collections::HashMap;
use std::sync::Arc;

use csv::StringRecord;

/// Column name to position lookup, shared by every row of one table.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for name in names {
            let name = normalize_header(name.as_ref());
            let position = index.names.len();
            // First occurrence wins for duplicated headers.
            index.positions.entry(name.clone()).or_insert(position);
            index.names.push(name);
        }
        index
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }
}

/// Normalizes a header value: strips a UTF-8 BOM and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// One data line of a source table.
#[derive(Debug, Clone)]
pub struct RawRow {
    columns: Arc<ColumnIndex>,
    values: StringRecord,
}

impl RawRow {
    pub(crate) fn new(columns: Arc<ColumnIndex>, values: StringRecord) -> Self {
        Self { columns, values }
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (names, values): (Vec<&str>, Vec<&str>) = pairs.into_iter().unzip();
        Self {
            columns: Arc::new(ColumnIndex::new(names)),
            values: StringRecord::from(values),
        }
    }

    /// Value of a column, `None` when the column is absent from the table or the row is short.
    pub fn get(&self, column: &str) -> Option<&str> {
        let position = self.columns.position(column)?;
        self.values.get(position)
    }

    /// Like [`RawRow::get`], but blank values count as absent.
    pub fn get_non_empty(&self, column: &str) -> Option<&str> {
        self.get(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn columns(&self) -> &[String] {
        self.columns.names()
    }
}

/// Parses a trimmed integer cell.
pub fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
