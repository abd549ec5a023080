//! Exported CSV files read back through the table reader.

use wago_ingest::{RawRow, TableReader};
use wago_model::{ExpansionId, ItemClass, ItemQuality, ItemRecord};
use wago_output::{CSV_COLUMNS, LuaLayout, write_category_csv, write_lua};

fn record(id: u32, name: &str) -> ItemRecord {
    ItemRecord {
        id,
        name: name.to_string(),
        class: ItemClass::Consumable,
        subclass_id: 1,
        quality: ItemQuality::Common,
        item_level: 35,
        required_level: 30,
        stackable: 20,
        sell_price: 250,
        expansion: ExpansionId::from_raw(9),
        description: "Restores health, over time.".to_string(),
        spell_category: "Healing Potion".to_string(),
    }
}

#[test]
fn csv_round_trip_keeps_ids_and_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    let records = vec![record(500, "Super Pot"), record(42, "Minor, Pot"), record(77, "Mid Pot")];
    let path = write_category_csv(dir.path(), "potion", &records)
        .expect("write csv")
        .expect("non-empty category is written");

    let rows: Vec<RawRow> = TableReader::open(&path, &CSV_COLUMNS)
        .expect("open exported csv")
        .collect::<Result<_, _>>()
        .expect("read rows");
    let read_back: Vec<(String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.get("ID").unwrap_or_default().to_string(),
                row.get("Name").unwrap_or_default().to_string(),
            )
        })
        .collect();
    assert_eq!(
        read_back,
        vec![
            ("42".to_string(), "Minor, Pot".to_string()),
            ("77".to_string(), "Mid Pot".to_string()),
            ("500".to_string(), "Super Pot".to_string()),
        ]
    );
    assert_eq!(rows[0].columns(), CSV_COLUMNS);
    assert_eq!(rows[2].get("Expansion"), Some("DRAGONFLIGHT"));
}

#[test]
fn unknown_expansion_is_written_as_label() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut item = record(1, "Future Pot");
    item.expansion = ExpansionId::from_raw(99);
    let path = write_category_csv(dir.path(), "potion", &[item])
        .expect("write csv")
        .expect("written");

    let row = TableReader::open(&path, &["Expansion"])
        .expect("open")
        .next()
        .expect("one row")
        .expect("valid row");
    assert_eq!(row.get("Expansion"), Some("UNKNOWN_99"));
}

#[test]
fn merged_lua_is_written_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let potions = vec![record(500, "Super Pot")];
    let written = write_lua(dir.path(), "MyAddon", [("potion", &potions[..])], LuaLayout::Merged)
        .expect("write lua");
    assert_eq!(written, vec![dir.path().join("data.lua")]);

    let contents = std::fs::read_to_string(&written[0]).expect("read lua");
    assert!(contents.contains("   [9] = { -- DRAGONFLIGHT\n     [500] = \"Super Pot\",\n   },"));
    assert!(contents.ends_with("}\n"));
}
