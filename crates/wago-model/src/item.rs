use serde::{Deserialize, Serialize};

use crate::enums::{ExpansionId, ItemClass, ItemQuality};

/// Item identifier shared by every item table.
pub type ItemId = u32;

/// Taxonomy fields of an item (`Item.ClassID`, `Item.SubclassID`).
///
/// Kept as raw integers: the class is only validated when a record is
/// materialized, and the subclass has no meaning without the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Taxonomy {
    pub class_id: i64,
    pub subclass_id: i64,
}

/// A fully joined item (taxonomy + display fields + resolved label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub class: ItemClass,
    pub subclass_id: i64,
    pub quality: ItemQuality,
    pub item_level: i64,
    pub required_level: i64,
    pub stackable: i64,
    pub sell_price: i64,
    pub expansion: ExpansionId,
    pub description: String,
    /// Spell category label reached through the item effect join; empty when unresolved.
    pub spell_category: String,
}
