use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wago_model::{CategoryKey, ItemClass, ItemSubclass};

use crate::types::{CategorySummary, ExtractResult, OutputFile, OutputKind};

pub fn print_summary(result: &ExtractResult) {
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File Type"),
        header_cell("File"),
        header_cell("Items"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for file in &result.files {
        table.add_row(vec![
            kind_cell(file.kind),
            Cell::new(file_name(&file.path)),
            items_cell(file),
        ]);
    }
    for category in result.categories.iter().filter(|c| c.items == 0) {
        table.add_row(vec![
            dim_cell("Skipped"),
            empty_category_cell(category),
            dim_cell(0),
        ]);
    }
    let total: usize = result.categories.iter().map(|c| c.items).sum();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} categories", result.categories.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let stats = &result.stats;
    println!(
        "Scanned {} items ({} without taxonomy, {} skipped)",
        stats.rows_scanned, stats.rows_without_taxonomy, stats.rows_skipped
    );
    println!("Completed in {:.2}s", result.elapsed.as_secs_f64());
}

/// Table of every accepted category key.
pub fn category_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Identifier (use with -c)"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);

    for key in ["food", "drinks", "potions"] {
        let value = match CategoryKey::parse(key) {
            Some(CategoryKey::TaxonomySubclass(subclass)) => subclass_value(subclass),
            _ => "spell category label".to_string(),
        };
        table.add_row(vec![Cell::new("Semantic"), key_cell(key), dim_cell(value)]);
    }
    for class in ItemClass::ALL {
        table.add_row(vec![
            Cell::new("Class"),
            key_cell(&class.as_str().to_lowercase()),
            dim_cell(class.id()),
        ]);
    }
    for subclass in ItemSubclass::ALL {
        table.add_row(vec![
            Cell::new("Sub-Class"),
            key_cell(&subclass.as_str().to_lowercase()),
            dim_cell(subclass_value(subclass)),
        ]);
    }
    for (alias, class) in CategoryKey::fallback_aliases() {
        table.add_row(vec![
            Cell::new("Alias"),
            key_cell(alias),
            dim_cell(class.as_str().to_lowercase()),
        ]);
    }
    table
}

fn subclass_value(subclass: ItemSubclass) -> String {
    format!("{} ({})", subclass.id(), subclass.context())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn kind_cell(kind: OutputKind) -> Cell {
    Cell::new(kind.label())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn items_cell(file: &OutputFile) -> Cell {
    match file.items {
        Some(count) => Cell::new(count),
        None => Cell::new("Merged").fg(Color::Green),
    }
}

fn empty_category_cell(category: &CategorySummary) -> Cell {
    if category.known {
        dim_cell(format!("{} (no matches)", category.name))
    } else {
        Cell::new(format!("{} (unknown key)", category.name)).fg(Color::Yellow)
    }
}

fn key_cell(key: &str) -> Cell {
    Cell::new(key).fg(Color::Green)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
