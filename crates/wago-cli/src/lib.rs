//! CLI library components for the WoW item extractor.

pub mod categories;
pub mod cli;
pub mod logging;
pub mod options;
