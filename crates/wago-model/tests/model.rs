//! Tests for wago-model types.

use proptest::prelude::*;

use wago_model::{
    CategoryKey, ExpansionId, ItemClass, ItemSubclass, ModelError, SubclassContext, sanitize_text,
};

#[test]
fn every_subclass_name_parses_back() {
    for subclass in ItemSubclass::ALL {
        let parsed = CategoryKey::parse(subclass.as_str());
        if subclass == ItemSubclass::Miscellaneous {
            // Shadowed by the class of the same name.
            assert_eq!(
                parsed,
                Some(CategoryKey::TaxonomyClass(ItemClass::Miscellaneous))
            );
        } else {
            assert_eq!(parsed, Some(CategoryKey::TaxonomySubclass(subclass)));
        }
    }
}

#[test]
fn canonical_names_are_stable_under_reparse() {
    for raw in ["food", "drinks", "potions", "PLATE", "weapons", "axe1h", "armour"] {
        let key = CategoryKey::parse(raw).expect("known key");
        let canonical = key.canonical_name();
        let reparsed = CategoryKey::parse(&canonical).expect("canonical key parses");
        assert_eq!(reparsed.canonical_name(), canonical);
    }
}

#[test]
fn armor_subclasses_use_armor_context() {
    for subclass in [
        ItemSubclass::Cloth,
        ItemSubclass::Leather,
        ItemSubclass::Mail,
        ItemSubclass::Plate,
        ItemSubclass::Shield,
    ] {
        assert_eq!(subclass.context(), SubclassContext::Armor);
        assert_eq!(subclass.context().class(), ItemClass::Armor);
    }
}

#[test]
fn unknown_class_error_message() {
    let err = ItemClass::try_from(42).unwrap_err();
    assert_eq!(err, ModelError::UnknownClass(42));
    assert_eq!(err.to_string(), "unknown item class id: 42");
}

#[test]
fn unknown_expansion_keeps_raw_value() {
    let expansion = ExpansionId::from_raw(99);
    assert_eq!(expansion, ExpansionId::Unknown(99));
    assert_eq!(expansion.label(), "UNKNOWN_99");
}

proptest! {
    #[test]
    fn sanitized_text_is_single_line(raw in ".*") {
        let cleaned = sanitize_text(&raw);
        prop_assert!(!cleaned.contains('\r'));
        prop_assert!(!cleaned.contains('\n'));
        prop_assert!(!cleaned.contains('"'));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    #[test]
    fn sanitize_is_idempotent(raw in ".*") {
        let once = sanitize_text(&raw);
        prop_assert_eq!(sanitize_text(&once), once);
    }
}
