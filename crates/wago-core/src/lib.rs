//! Relational join and categorization engine for WoW item extraction.
//!
//! The auxiliary tables are indexed once ([`RelationalIndex`]); the primary
//! table is then streamed row by row through the category [`matcher`] and the
//! record [`materialize`]r into [`CategoryGroups`].

pub mod error;
pub mod grouping;
pub mod index;
pub mod matcher;
pub mod materialize;
pub mod pipeline;
pub mod progress;

pub use error::{CoreError, Result};
pub use grouping::CategoryGroups;
pub use index::RelationalIndex;
pub use matcher::{matches, matches_str};
pub use materialize::SkipReason;
pub use pipeline::{CategoryRequest, ExtractStats, Extraction, extract, filter_rows};
pub use progress::{NoopReporter, Phase, ProgressReporter};
