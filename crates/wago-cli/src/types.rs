use std::path::PathBuf;
use std::time::Duration;

use wago_core::ExtractStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Csv,
    Lua,
}

impl OutputKind {
    pub fn label(self) -> &'static str {
        match self {
            OutputKind::Csv => "CSV Data",
            OutputKind::Lua => "Lua Module",
        }
    }
}

/// One file written by the run.
#[derive(Debug)]
pub struct OutputFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    /// Item count; `None` for the merged Lua module.
    pub items: Option<usize>,
}

#[derive(Debug)]
pub struct CategorySummary {
    pub name: String,
    /// Whether the key was recognised.
    pub known: bool,
    pub items: usize,
}

#[derive(Debug)]
pub struct ExtractResult {
    pub output_dir: PathBuf,
    pub categories: Vec<CategorySummary>,
    pub files: Vec<OutputFile>,
    pub stats: ExtractStats,
    pub elapsed: Duration,
}
