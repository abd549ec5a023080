//! Export of extracted WoW items.
//!
//! - **CSV**: one `<category>.csv` per non-empty category, rows ordered by id
//! - **Lua**: a table module keyed by namespace, category, expansion and item id

mod csv_writer;
mod error;
mod lua;

pub use csv_writer::{CSV_COLUMNS, csv_path, write_category_csv};
pub use error::{OutputError, Result};
pub use lua::{
    LuaLayout, MERGED_FILE_NAME, is_valid_category_name, is_valid_namespace, render_lua, write_lua,
};
