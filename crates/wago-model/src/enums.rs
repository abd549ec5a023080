//! Closed enumerations for the item taxonomy.
//!
//! Class and quality ids are structurally required: an integer outside the
//! known set is an error. Expansion ids are open because Blizzard adds new
//! expansions over time, so unknown values are carried as raw integers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Top-level item class (`Item.ClassID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemClass {
    Consumable,
    Container,
    Weapon,
    Gem,
    Armor,
    Reagent,
    Projectile,
    Tradeskill,
    ItemEnhancement,
    Recipe,
    MoneyObsolete,
    Quiver,
    Quest,
    Key,
    PermanentObsolete,
    Miscellaneous,
    Glyph,
    BattlePets,
    WowToken,
    Profession,
    Housing,
}

impl ItemClass {
    pub const ALL: [ItemClass; 21] = [
        ItemClass::Consumable,
        ItemClass::Container,
        ItemClass::Weapon,
        ItemClass::Gem,
        ItemClass::Armor,
        ItemClass::Reagent,
        ItemClass::Projectile,
        ItemClass::Tradeskill,
        ItemClass::ItemEnhancement,
        ItemClass::Recipe,
        ItemClass::MoneyObsolete,
        ItemClass::Quiver,
        ItemClass::Quest,
        ItemClass::Key,
        ItemClass::PermanentObsolete,
        ItemClass::Miscellaneous,
        ItemClass::Glyph,
        ItemClass::BattlePets,
        ItemClass::WowToken,
        ItemClass::Profession,
        ItemClass::Housing,
    ];

    /// Numeric id as stored in the `ClassID` column.
    pub fn id(self) -> i64 {
        match self {
            ItemClass::Consumable => 0,
            ItemClass::Container => 1,
            ItemClass::Weapon => 2,
            ItemClass::Gem => 3,
            ItemClass::Armor => 4,
            ItemClass::Reagent => 5,
            ItemClass::Projectile => 6,
            ItemClass::Tradeskill => 7,
            ItemClass::ItemEnhancement => 8,
            ItemClass::Recipe => 9,
            ItemClass::MoneyObsolete => 10,
            ItemClass::Quiver => 11,
            ItemClass::Quest => 12,
            ItemClass::Key => 13,
            ItemClass::PermanentObsolete => 14,
            ItemClass::Miscellaneous => 15,
            ItemClass::Glyph => 16,
            ItemClass::BattlePets => 17,
            ItemClass::WowToken => 18,
            ItemClass::Profession => 19,
            ItemClass::Housing => 20,
        }
    }

    /// Upper-case label used in CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemClass::Consumable => "CONSUMABLE",
            ItemClass::Container => "CONTAINER",
            ItemClass::Weapon => "WEAPON",
            ItemClass::Gem => "GEM",
            ItemClass::Armor => "ARMOR",
            ItemClass::Reagent => "REAGENT",
            ItemClass::Projectile => "PROJECTILE",
            ItemClass::Tradeskill => "TRADESKILL",
            ItemClass::ItemEnhancement => "ITEM_ENHANCEMENT",
            ItemClass::Recipe => "RECIPE",
            ItemClass::MoneyObsolete => "MONEY_OBSOLETE",
            ItemClass::Quiver => "QUIVER",
            ItemClass::Quest => "QUEST",
            ItemClass::Key => "KEY",
            ItemClass::PermanentObsolete => "PERMANENT_OBSOLETE",
            ItemClass::Miscellaneous => "MISCELLANEOUS",
            ItemClass::Glyph => "GLYPH",
            ItemClass::BattlePets => "BATTLE_PETS",
            ItemClass::WowToken => "WOW_TOKEN",
            ItemClass::Profession => "PROFESSION",
            ItemClass::Housing => "HOUSING",
        }
    }
}

impl TryFrom<i64> for ItemClass {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        ItemClass::ALL
            .into_iter()
            .find(|class| class.id() == value)
            .ok_or(ModelError::UnknownClass(value))
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item rarity (`ItemSparse.OverallQualityID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemQuality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Artifact,
    Heirloom,
}

impl ItemQuality {
    pub fn id(self) -> i64 {
        match self {
            ItemQuality::Poor => 0,
            ItemQuality::Common => 1,
            ItemQuality::Uncommon => 2,
            ItemQuality::Rare => 3,
            ItemQuality::Epic => 4,
            ItemQuality::Legendary => 5,
            ItemQuality::Artifact => 6,
            ItemQuality::Heirloom => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemQuality::Poor => "POOR",
            ItemQuality::Common => "COMMON",
            ItemQuality::Uncommon => "UNCOMMON",
            ItemQuality::Rare => "RARE",
            ItemQuality::Epic => "EPIC",
            ItemQuality::Legendary => "LEGENDARY",
            ItemQuality::Artifact => "ARTIFACT",
            ItemQuality::Heirloom => "HEIRLOOM",
        }
    }
}

impl TryFrom<i64> for ItemQuality {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ItemQuality::Poor),
            1 => Ok(ItemQuality::Common),
            2 => Ok(ItemQuality::Uncommon),
            3 => Ok(ItemQuality::Rare),
            4 => Ok(ItemQuality::Epic),
            5 => Ok(ItemQuality::Legendary),
            6 => Ok(ItemQuality::Artifact),
            7 => Ok(ItemQuality::Heirloom),
            other => Err(ModelError::UnknownQuality(other)),
        }
    }
}

impl fmt::Display for ItemQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known game releases (`ItemSparse.ExpansionID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Expansion {
    /// Upstream sentinel `-3` used for items without an assigned expansion.
    UnknownId,
    Classic,
    TheBurningCrusade,
    WrathOfTheLichKing,
    Cataclysm,
    MistsOfPandaria,
    WarlordsOfDraenor,
    Legion,
    BattleForAzeroth,
    Shadowlands,
    Dragonflight,
    TheWarWithin,
    Midnight,
}

impl Expansion {
    pub const ALL: [Expansion; 13] = [
        Expansion::UnknownId,
        Expansion::Classic,
        Expansion::TheBurningCrusade,
        Expansion::WrathOfTheLichKing,
        Expansion::Cataclysm,
        Expansion::MistsOfPandaria,
        Expansion::WarlordsOfDraenor,
        Expansion::Legion,
        Expansion::BattleForAzeroth,
        Expansion::Shadowlands,
        Expansion::Dragonflight,
        Expansion::TheWarWithin,
        Expansion::Midnight,
    ];

    pub fn id(self) -> i64 {
        match self {
            Expansion::UnknownId => -3,
            Expansion::Classic => 0,
            Expansion::TheBurningCrusade => 1,
            Expansion::WrathOfTheLichKing => 2,
            Expansion::Cataclysm => 3,
            Expansion::MistsOfPandaria => 4,
            Expansion::WarlordsOfDraenor => 5,
            Expansion::Legion => 6,
            Expansion::BattleForAzeroth => 7,
            Expansion::Shadowlands => 8,
            Expansion::Dragonflight => 9,
            Expansion::TheWarWithin => 10,
            Expansion::Midnight => 11,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Expansion::UnknownId => "UNKNOWN_ID",
            Expansion::Classic => "CLASSIC",
            Expansion::TheBurningCrusade => "THE_BURNING_CRUSADE",
            Expansion::WrathOfTheLichKing => "WRATH_OF_THE_LICH_KING",
            Expansion::Cataclysm => "CATACLYSM",
            Expansion::MistsOfPandaria => "MISTS_OF_PANDARIA",
            Expansion::WarlordsOfDraenor => "WARLORDS_OF_DRAENOR",
            Expansion::Legion => "LEGION",
            Expansion::BattleForAzeroth => "BATTLE_FOR_AZEROTH",
            Expansion::Shadowlands => "SHADOWLANDS",
            Expansion::Dragonflight => "DRAGONFLIGHT",
            Expansion::TheWarWithin => "THE_WAR_WITHIN",
            Expansion::Midnight => "MIDNIGHT",
        }
    }

    pub fn from_id(value: i64) -> Option<Self> {
        Expansion::ALL
            .into_iter()
            .find(|expansion| expansion.id() == value)
    }
}

/// Expansion value of an item: either a known release or the raw integer.
///
/// The display label of an unknown value is derived when it is rendered,
/// not when the record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpansionId {
    Known(Expansion),
    Unknown(i64),
}

impl ExpansionId {
    pub fn from_raw(value: i64) -> Self {
        match Expansion::from_id(value) {
            Some(expansion) => ExpansionId::Known(expansion),
            None => ExpansionId::Unknown(value),
        }
    }

    /// Raw integer id, used for grouping and ordering.
    pub fn raw(self) -> i64 {
        match self {
            ExpansionId::Known(expansion) => expansion.id(),
            ExpansionId::Unknown(value) => value,
        }
    }

    pub fn label(self) -> String {
        match self {
            ExpansionId::Known(expansion) => expansion.as_str().to_string(),
            ExpansionId::Unknown(value) => format!("UNKNOWN_{value}"),
        }
    }
}

impl fmt::Display for ExpansionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionId::Known(expansion) => f.write_str(expansion.as_str()),
            ExpansionId::Unknown(value) => write!(f, "UNKNOWN_{value}"),
        }
    }
}
