//! Source table reading.

mod reader;
mod row;

pub use reader::{TableReader, count_data_rows};
pub use row::{ColumnIndex, RawRow, normalize_header, parse_i64};
