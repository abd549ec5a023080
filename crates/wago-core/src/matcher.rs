//! Category predicate.
//!
//! Subclass ids collide across classes (subclass `1` is a potion, a
//! two-handed axe or cloth depending on the class), so a subclass rule never
//! matches without also checking the class the subclass belongs to.

use wago_model::CategoryKey;

/// Label fragment selecting food items.
pub const FOOD_MARKER: &str = "Food";
/// Label fragment selecting drink items.
pub const DRINK_MARKER: &str = "Drink";

/// Whether an item with the given taxonomy and resolved label belongs to `key`.
pub fn matches(key: &CategoryKey, class_id: i64, subclass_id: i64, label: &str) -> bool {
    match key {
        CategoryKey::SemanticFood => label.contains(FOOD_MARKER),
        CategoryKey::SemanticDrinks => label.contains(DRINK_MARKER),
        CategoryKey::TaxonomyClass(class) | CategoryKey::RawFallback(class) => {
            class_id == class.id()
        }
        CategoryKey::TaxonomySubclass(subclass) => {
            subclass_id == subclass.id() && class_id == subclass.context().class().id()
        }
    }
}

/// Parses `raw` and evaluates it; keys no rule recognises never match.
pub fn matches_str(raw: &str, class_id: i64, subclass_id: i64, label: &str) -> bool {
    CategoryKey::parse(raw).is_some_and(|key| matches(&key, class_id, subclass_id, label))
}
