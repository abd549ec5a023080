//! Run configuration resolved from the command line.

use std::path::PathBuf;

use anyhow::{Result, bail};
use wago_core::CategoryRequest;
use wago_output::{LuaLayout, is_valid_namespace};

use crate::categories::{normalize_categories, selected_keys};
use crate::cli::Cli;

/// Lua export settings; absent when `--lua` is not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaOptions {
    pub namespace: String,
    pub layout: LuaLayout,
}

/// Everything an extraction run needs.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub categories: Vec<CategoryRequest>,
    pub output_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub lua: Option<LuaOptions>,
    pub offline: bool,
    pub base_url: String,
}

impl ExtractOptions {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let lua = if cli.lua {
            if !is_valid_namespace(&cli.namespace) {
                bail!("namespace '{}' is not a valid Lua identifier", cli.namespace);
            }
            Some(LuaOptions {
                namespace: cli.namespace.clone(),
                layout: if cli.split_lua {
                    LuaLayout::Split
                } else {
                    LuaLayout::Merged
                },
            })
        } else {
            None
        };
        Ok(Self {
            categories: normalize_categories(&selected_keys(cli)),
            output_dir: cli.output_dir.clone(),
            raw_dir: cli.raw_dir.clone(),
            lua,
            offline: cli.offline,
            base_url: cli.base_url.clone(),
        })
    }
}
