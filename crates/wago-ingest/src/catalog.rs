//! Catalogue of the upstream DB2 tables the extractor needs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// One of the five source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceTable {
    /// Taxonomy (class / subclass) per item.
    Item,
    /// Display and descriptive fields per item; streamed as the primary table.
    ItemSparse,
    /// Join table between items and item effects.
    ItemXItemEffect,
    ItemEffect,
    SpellCategory,
}

impl SourceTable {
    /// Download order.
    pub const ALL: [SourceTable; 5] = [
        SourceTable::Item,
        SourceTable::ItemSparse,
        SourceTable::ItemXItemEffect,
        SourceTable::ItemEffect,
        SourceTable::SpellCategory,
    ];

    /// Upstream table name.
    pub fn name(self) -> &'static str {
        match self {
            SourceTable::Item => "Item",
            SourceTable::ItemSparse => "ItemSparse",
            SourceTable::ItemXItemEffect => "ItemXItemEffect",
            SourceTable::ItemEffect => "ItemEffect",
            SourceTable::SpellCategory => "SpellCategory",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Columns that must be present in the header for the table to be usable.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            SourceTable::Item => &["ID", "ClassID", "SubclassID"],
            SourceTable::ItemSparse => &["ID"],
            SourceTable::ItemXItemEffect => &["ItemID", "ItemEffectID"],
            SourceTable::ItemEffect => &["ID"],
            SourceTable::SpellCategory => &["ID"],
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// On-disk location of every source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub item: PathBuf,
    pub item_sparse: PathBuf,
    pub item_x_item_effect: PathBuf,
    pub item_effect: PathBuf,
    pub spell_category: PathBuf,
}

impl TablePaths {
    /// Conventional `<dir>/<Table>.csv` layout of the raw cache.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            item: dir.join(SourceTable::Item.file_name()),
            item_sparse: dir.join(SourceTable::ItemSparse.file_name()),
            item_x_item_effect: dir.join(SourceTable::ItemXItemEffect.file_name()),
            item_effect: dir.join(SourceTable::ItemEffect.file_name()),
            spell_category: dir.join(SourceTable::SpellCategory.file_name()),
        }
    }

    pub fn path(&self, table: SourceTable) -> &Path {
        match table {
            SourceTable::Item => &self.item,
            SourceTable::ItemSparse => &self.item_sparse,
            SourceTable::ItemXItemEffect => &self.item_x_item_effect,
            SourceTable::ItemEffect => &self.item_effect,
            SourceTable::SpellCategory => &self.spell_category,
        }
    }

    /// Tables whose file does not exist yet.
    pub fn missing(&self) -> Vec<SourceTable> {
        SourceTable::ALL
            .into_iter()
            .filter(|table| !self.path(*table).is_file())
            .collect()
    }

    /// Checks that every table is already cached; the first absent file is reported.
    pub fn require_cached(&self) -> Result<()> {
        match self.missing().first() {
            Some(table) => Err(IngestError::FileNotFound {
                path: self.path(*table).to_path_buf(),
            }),
            None => Ok(()),
        }
    }
}
