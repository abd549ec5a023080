//! End-to-end extraction over small on-disk tables.

use std::fs;
use std::path::Path;

use wago_core::{
    CategoryRequest, CoreError, NoopReporter, Phase, ProgressReporter, RelationalIndex, extract,
};
use wago_ingest::TablePaths;
use wago_model::{ExpansionId, ItemClass};

struct Tables<'a> {
    item: &'a str,
    sparse: &'a str,
    effect: &'a str,
    category: &'a str,
    join: &'a str,
}

const FIXTURE: Tables<'static> = Tables {
    item: "ID,ClassID,SubclassID\n500,0,1\n",
    sparse: "ID,Display_lang,ExpansionID\n500,Super Pot,9\n",
    effect: "ID,SpellCategoryID\n10,88\n",
    category: "ID,Name_lang\n88,Healing Potion\n",
    join: "ItemID,ItemEffectID\n500,10\n",
};

fn write_tables(dir: &Path, tables: &Tables<'_>) -> TablePaths {
    fs::write(dir.join("Item.csv"), tables.item).expect("write Item");
    fs::write(dir.join("ItemSparse.csv"), tables.sparse).expect("write ItemSparse");
    fs::write(dir.join("ItemEffect.csv"), tables.effect).expect("write ItemEffect");
    fs::write(dir.join("SpellCategory.csv"), tables.category).expect("write SpellCategory");
    fs::write(dir.join("ItemXItemEffect.csv"), tables.join).expect("write ItemXItemEffect");
    TablePaths::in_dir(dir)
}

#[derive(Default)]
struct RecordingReporter {
    events: Vec<String>,
    advanced: u64,
}

impl ProgressReporter for RecordingReporter {
    fn phase_started(&mut self, phase: Phase, total: Option<u64>) {
        self.events.push(format!("start {phase:?} {total:?}"));
    }

    fn advance(&mut self, delta: u64) {
        self.advanced += delta;
    }

    fn phase_finished(&mut self, phase: Phase) {
        self.events.push(format!("finish {phase:?}"));
    }
}

#[test]
fn potions_pick_up_the_joined_label() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(dir.path(), &FIXTURE);

    let requests = CategoryRequest::parse_all(["potions"]);
    let extraction = extract(&paths, &requests, &mut NoopReporter).expect("extract");

    let potions = extraction.groups.get("potions").expect("potions group");
    assert_eq!(potions.len(), 1);
    assert_eq!(potions[0].id, 500);
    assert_eq!(potions[0].name, "Super Pot");
    assert_eq!(potions[0].spell_category, "Healing Potion");
    assert_eq!(potions[0].class, ItemClass::Consumable);
    assert_eq!(extraction.stats.rows_scanned, 1);
    assert_eq!(extraction.stats.matches.get("potions"), Some(&1));
    assert_eq!(extraction.groups.get("potion"), None);
}

#[test]
fn armor_subclass_one_is_cloth_not_potion() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(
        dir.path(),
        &Tables {
            item: "ID,ClassID,SubclassID\n600,4,1\n",
            sparse: "ID,Display_lang\n600,Linen Robe\n",
            ..FIXTURE
        },
    );

    let requests = CategoryRequest::parse_all(["potions", "cloth", "armor"]);
    let extraction = extract(&paths, &requests, &mut NoopReporter).expect("extract");

    assert_eq!(extraction.groups.get("potions").map(<[_]>::len), Some(0));
    assert_eq!(extraction.groups.get("cloth").map(<[_]>::len), Some(1));
    assert_eq!(extraction.groups.get("armor").map(<[_]>::len), Some(1));
}

#[test]
fn food_label_matches_regardless_of_taxonomy() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(
        dir.path(),
        &Tables {
            item: "ID,ClassID,SubclassID\n700,15,0\n701,0,5\n",
            sparse: "ID,Display_lang\n700,Odd Snack\n701,Plain Water\n",
            effect: "ID,SpellCategoryID\n20,30\n21,31\n22,\n",
            category: "ID,Name_lang\n30,Food\n31,Drink\n",
            join: "ItemID,ItemEffectID\n700,20\n701,21\n701,22\n",
        },
    );

    let requests = CategoryRequest::parse_all(["food", "drinks", "potions"]);
    let extraction = extract(&paths, &requests, &mut NoopReporter).expect("extract");

    let food = extraction.groups.get("food").expect("food group");
    assert_eq!(food.iter().map(|r| r.id).collect::<Vec<_>>(), vec![700]);
    let drinks = extraction.groups.get("drinks").expect("drinks group");
    assert_eq!(drinks.iter().map(|r| r.id).collect::<Vec<_>>(), vec![701]);
    assert_eq!(extraction.groups.get("potions"), Some(&[][..]));
}

#[test]
fn indexing_twice_gives_identical_indices() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(dir.path(), &FIXTURE);

    let first = RelationalIndex::load(&paths, &mut NoopReporter).expect("first index");
    let second = RelationalIndex::load(&paths, &mut NoopReporter).expect("second index");
    assert_eq!(first, second);
    assert_eq!(first.label(500), "Healing Potion");
}

#[test]
fn unknown_expansion_is_carried_through() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(
        dir.path(),
        &Tables {
            sparse: "ID,Display_lang,ExpansionID\n500,Future Pot,99\n",
            ..FIXTURE
        },
    );

    let requests = CategoryRequest::parse_all(["potion"]);
    let extraction = extract(&paths, &requests, &mut NoopReporter).expect("extract");
    let record = &extraction.groups.get("potion").expect("potion group")[0];
    assert_eq!(record.expansion, ExpansionId::Unknown(99));
    assert_eq!(record.expansion.to_string(), "UNKNOWN_99");
}

#[test]
fn bad_rows_are_skipped_and_counted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(
        dir.path(),
        &Tables {
            item: "ID,ClassID,SubclassID\n1,0,1\n2,0,1\n3,0,1\n",
            sparse: "ID,Display_lang,OverallQualityID\n1,Good,1\n2,Cursed,42\n3,Fine,2\n4,Orphan,1\n",
            ..FIXTURE
        },
    );

    let requests = CategoryRequest::parse_all(["potion", "consumable"]);
    let mut reporter = RecordingReporter::default();
    let extraction = extract(&paths, &requests, &mut reporter).expect("extract");

    let ids: Vec<u32> = extraction.groups.get("potion").expect("potion group").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(extraction.groups.get("consumable").map(<[_]>::len), Some(2));
    assert_eq!(extraction.stats.rows_scanned, 4);
    assert_eq!(extraction.stats.rows_skipped, 1);
    assert_eq!(extraction.stats.rows_without_taxonomy, 1);

    assert_eq!(
        reporter.events,
        vec![
            "start Indexing Some(4)",
            "finish Indexing",
            "start Filtering Some(4)",
            "finish Filtering",
        ]
    );
    assert_eq!(reporter.advanced, 8);
}

#[test]
fn missing_primary_id_aborts_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(
        dir.path(),
        &Tables {
            sparse: "ID,Display_lang\n,Nameless\n",
            ..FIXTURE
        },
    );

    let requests = CategoryRequest::parse_all(["potion"]);
    assert!(extract(&paths, &requests, &mut NoopReporter).is_err());
}

#[test]
fn blank_or_non_numeric_join_keys_abort_the_run() {
    for join in ["ItemID,ItemEffectID\n,10\n", "ItemID,ItemEffectID\nabc,10\n"] {
        let dir = tempfile::tempdir().expect("temp dir");
        let paths = write_tables(dir.path(), &Tables { join, ..FIXTURE });

        let requests = CategoryRequest::parse_all(["potions"]);
        let err = extract(&paths, &requests, &mut NoopReporter).expect_err("join key is required");
        assert!(
            matches!(
                err,
                CoreError::MissingValue { column: "ItemID", row: 1, .. }
                    | CoreError::InvalidValue { column: "ItemID", row: 1, .. }
            ),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn unrecognised_categories_produce_no_group() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_tables(dir.path(), &FIXTURE);

    let requests = CategoryRequest::parse_all(["hearth-stones", "../escape", "potions"]);
    assert_eq!(requests.len(), 3);
    let extraction = extract(&paths, &requests, &mut NoopReporter).expect("extract");

    let names: Vec<&str> = extraction.groups.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["potions"]);
    assert!(!extraction.stats.matches.contains_key("hearth-stones"));
}
