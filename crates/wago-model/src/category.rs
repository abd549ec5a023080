//! Typed category keys.
//!
//! A user-supplied category string is parsed once into a [`CategoryKey`];
//! everything downstream matches on the variant instead of the string.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::ItemClass;
use crate::subclass::ItemSubclass;

/// Coarse aliases that resolve to a whole item class.
const FALLBACK_CLASSES: &[(&str, ItemClass)] = &[
    ("armour", ItemClass::Armor),
    ("bag", ItemClass::Container),
    ("bags", ItemClass::Container),
    ("tradegoods", ItemClass::Tradeskill),
    ("pet", ItemClass::BattlePets),
    ("pets", ItemClass::BattlePets),
    ("enchant", ItemClass::ItemEnhancement),
    ("enchants", ItemClass::ItemEnhancement),
    ("token", ItemClass::WowToken),
    ("tokens", ItemClass::WowToken),
    ("questitems", ItemClass::Quest),
    ("misc", ItemClass::Miscellaneous),
];

/// A requested extraction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    /// Items whose spell category label mentions "Food".
    SemanticFood,
    /// Items whose spell category label mentions "Drink".
    SemanticDrinks,
    TaxonomyClass(ItemClass),
    /// Subclass match; the subclass carries the class it must be paired with.
    TaxonomySubclass(ItemSubclass),
    RawFallback(ItemClass),
}

impl CategoryKey {
    /// Parse a category key. Returns `None` when no rule recognises it.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return None;
        }
        match key.as_str() {
            "food" | "foods" => return Some(CategoryKey::SemanticFood),
            "drink" | "drinks" => return Some(CategoryKey::SemanticDrinks),
            _ => {}
        }
        if let Some(found) = taxonomy_key(&key) {
            return Some(found);
        }
        if let Some((_, class)) = FALLBACK_CLASSES.iter().find(|(alias, _)| *alias == key) {
            return Some(CategoryKey::RawFallback(*class));
        }
        key.strip_suffix('s').and_then(taxonomy_key)
    }

    /// Coarse aliases accepted besides class and subclass names.
    pub fn fallback_aliases() -> &'static [(&'static str, ItemClass)] {
        FALLBACK_CLASSES
    }

    /// Canonical spelling of the key, used when displaying it.
    pub fn canonical_name(self) -> String {
        match self {
            CategoryKey::SemanticFood => "food".to_string(),
            CategoryKey::SemanticDrinks => "drinks".to_string(),
            CategoryKey::TaxonomyClass(class) | CategoryKey::RawFallback(class) => {
                class.as_str().to_lowercase()
            }
            CategoryKey::TaxonomySubclass(subclass) => subclass.as_str().to_lowercase(),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

fn taxonomy_key(key: &str) -> Option<CategoryKey> {
    if let Some(class) = ItemClass::ALL
        .into_iter()
        .find(|class| normalize_key(class.as_str()) == key)
    {
        return Some(CategoryKey::TaxonomyClass(class));
    }
    ItemSubclass::ALL
        .into_iter()
        .find(|subclass| normalize_key(subclass.as_str()) == key)
        .map(CategoryKey::TaxonomySubclass)
}

/// Lowercase and drop separators so `AXE1H`, `axe_1h` and `Axe-1H` compare equal.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
