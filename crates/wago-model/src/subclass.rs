//! Subclass ids and the class context that gives them meaning.
//!
//! Subclass ids are not globally unique: `1` is a potion under the
//! consumable class, a two-handed axe under weapons and cloth under armor.
//! Every subclass therefore carries the class it belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::ItemClass;

/// Class a subclass id must be paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubclassContext {
    Consumable,
    Weapon,
    Armor,
}

impl SubclassContext {
    pub fn class(self) -> ItemClass {
        match self {
            SubclassContext::Consumable => ItemClass::Consumable,
            SubclassContext::Weapon => ItemClass::Weapon,
            SubclassContext::Armor => ItemClass::Armor,
        }
    }
}

impl fmt::Display for SubclassContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class().as_str())
    }
}

/// Commonly used subclasses of the consumable, weapon and armor classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSubclass {
    // Consumables
    Potion,
    Elixir,
    Flask,
    FoodAndDrink,
    Bandage,
    VantusRunes,
    // Weapons
    Axe1h,
    Axe2h,
    Bow,
    Gun,
    Mace1h,
    Mace2h,
    Polearm,
    Sword1h,
    Sword2h,
    Warglaives,
    Staff,
    BearClaws,
    CatClaws,
    FistWeapons,
    Miscellaneous,
    Dagger,
    Thrown,
    Spear,
    Crossbow,
    Wand,
    FishingPole,
    // Armor
    Cloth,
    Leather,
    Mail,
    Plate,
    Shield,
}

impl ItemSubclass {
    pub const ALL: [ItemSubclass; 32] = [
        ItemSubclass::Potion,
        ItemSubclass::Elixir,
        ItemSubclass::Flask,
        ItemSubclass::FoodAndDrink,
        ItemSubclass::Bandage,
        ItemSubclass::VantusRunes,
        ItemSubclass::Axe1h,
        ItemSubclass::Axe2h,
        ItemSubclass::Bow,
        ItemSubclass::Gun,
        ItemSubclass::Mace1h,
        ItemSubclass::Mace2h,
        ItemSubclass::Polearm,
        ItemSubclass::Sword1h,
        ItemSubclass::Sword2h,
        ItemSubclass::Warglaives,
        ItemSubclass::Staff,
        ItemSubclass::BearClaws,
        ItemSubclass::CatClaws,
        ItemSubclass::FistWeapons,
        ItemSubclass::Miscellaneous,
        ItemSubclass::Dagger,
        ItemSubclass::Thrown,
        ItemSubclass::Spear,
        ItemSubclass::Crossbow,
        ItemSubclass::Wand,
        ItemSubclass::FishingPole,
        ItemSubclass::Cloth,
        ItemSubclass::Leather,
        ItemSubclass::Mail,
        ItemSubclass::Plate,
        ItemSubclass::Shield,
    ];

    /// Numeric id within the owning class.
    pub fn id(self) -> i64 {
        match self {
            ItemSubclass::Potion => 1,
            ItemSubclass::Elixir => 2,
            ItemSubclass::Flask => 3,
            ItemSubclass::FoodAndDrink => 5,
            ItemSubclass::Bandage => 7,
            ItemSubclass::VantusRunes => 9,
            ItemSubclass::Axe1h => 0,
            ItemSubclass::Axe2h => 1,
            ItemSubclass::Bow => 2,
            ItemSubclass::Gun => 3,
            ItemSubclass::Mace1h => 4,
            ItemSubclass::Mace2h => 5,
            ItemSubclass::Polearm => 6,
            ItemSubclass::Sword1h => 7,
            ItemSubclass::Sword2h => 8,
            ItemSubclass::Warglaives => 9,
            ItemSubclass::Staff => 10,
            ItemSubclass::BearClaws => 11,
            ItemSubclass::CatClaws => 12,
            ItemSubclass::FistWeapons => 13,
            ItemSubclass::Miscellaneous => 14,
            ItemSubclass::Dagger => 15,
            ItemSubclass::Thrown => 16,
            ItemSubclass::Spear => 17,
            ItemSubclass::Crossbow => 18,
            ItemSubclass::Wand => 19,
            ItemSubclass::FishingPole => 20,
            ItemSubclass::Cloth => 1,
            ItemSubclass::Leather => 2,
            ItemSubclass::Mail => 3,
            ItemSubclass::Plate => 4,
            ItemSubclass::Shield => 6,
        }
    }

    pub fn context(self) -> SubclassContext {
        match self {
            ItemSubclass::Potion
            | ItemSubclass::Elixir
            | ItemSubclass::Flask
            | ItemSubclass::FoodAndDrink
            | ItemSubclass::Bandage
            | ItemSubclass::VantusRunes => SubclassContext::Consumable,
            ItemSubclass::Cloth
            | ItemSubclass::Leather
            | ItemSubclass::Mail
            | ItemSubclass::Plate
            | ItemSubclass::Shield => SubclassContext::Armor,
            _ => SubclassContext::Weapon,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemSubclass::Potion => "POTION",
            ItemSubclass::Elixir => "ELIXIR",
            ItemSubclass::Flask => "FLASK",
            ItemSubclass::FoodAndDrink => "FOOD_AND_DRINK",
            ItemSubclass::Bandage => "BANDAGE",
            ItemSubclass::VantusRunes => "VANTUS_RUNES",
            ItemSubclass::Axe1h => "AXE_1H",
            ItemSubclass::Axe2h => "AXE_2H",
            ItemSubclass::Bow => "BOW",
            ItemSubclass::Gun => "GUN",
            ItemSubclass::Mace1h => "MACE_1H",
            ItemSubclass::Mace2h => "MACE_2H",
            ItemSubclass::Polearm => "POLEARM",
            ItemSubclass::Sword1h => "SWORD_1H",
            ItemSubclass::Sword2h => "SWORD_2H",
            ItemSubclass::Warglaives => "WARGLAIVES",
            ItemSubclass::Staff => "STAFF",
            ItemSubclass::BearClaws => "BEAR_CLAWS",
            ItemSubclass::CatClaws => "CAT_CLAWS",
            ItemSubclass::FistWeapons => "FIST_WEAPONS",
            ItemSubclass::Miscellaneous => "MISCELLANEOUS",
            ItemSubclass::Dagger => "DAGGER",
            ItemSubclass::Thrown => "THROWN",
            ItemSubclass::Spear => "SPEAR",
            ItemSubclass::Crossbow => "CROSSBOW",
            ItemSubclass::Wand => "WAND",
            ItemSubclass::FishingPole => "FISHING_POLE",
            ItemSubclass::Cloth => "CLOTH",
            ItemSubclass::Leather => "LEATHER",
            ItemSubclass::Mail => "MAIL",
            ItemSubclass::Plate => "PLATE",
            ItemSubclass::Shield => "SHIELD",
        }
    }
}

impl fmt::Display for ItemSubclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colliding_ids_differ_in_context() {
        assert_eq!(ItemSubclass::Potion.id(), ItemSubclass::Cloth.id());
        assert_eq!(ItemSubclass::Potion.id(), ItemSubclass::Axe2h.id());
        assert_ne!(ItemSubclass::Potion.context(), ItemSubclass::Cloth.context());
        assert_ne!(ItemSubclass::Potion.context(), ItemSubclass::Axe2h.context());
    }

    #[test]
    fn contexts() {
        assert_eq!(ItemSubclass::Flask.context(), SubclassContext::Consumable);
        assert_eq!(ItemSubclass::Shield.context(), SubclassContext::Armor);
        assert_eq!(ItemSubclass::Wand.context(), SubclassContext::Weapon);
    }
}
