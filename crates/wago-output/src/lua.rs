//! Lua table export for addon consumption.
//!
//! ```lua
//! NS = NS or {}
//! NS.POTION = {
//!    [9] = { -- DRAGONFLIGHT
//!      [500] = "Super Pot",
//!    },
//! }
//! ```
//!
//! Categories are keyed by their upper-cased name, then by expansion id and
//! item id, both ascending.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use wago_model::{ExpansionId, ItemRecord};

use crate::error::{OutputError, Result};

/// File name of the merged module.
pub const MERGED_FILE_NAME: &str = "data.lua";

/// How Lua output is laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LuaLayout {
    /// All categories in `data.lua`.
    #[default]
    Merged,
    /// One `<category>.lua` per category.
    Split,
}

/// Whether `name` can be used as a global Lua identifier.
pub fn is_valid_namespace(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

/// Whether `name` can key a Lua table once upper-cased and name an output file.
pub fn is_valid_category_name(name: &str) -> bool {
    is_valid_namespace(&name.to_uppercase())
}

pub(crate) fn ensure_category_name(name: &str) -> Result<()> {
    if is_valid_category_name(name) {
        Ok(())
    } else {
        Err(OutputError::InvalidCategory {
            name: name.to_string(),
        })
    }
}

/// Renders a Lua module holding every given category.
///
/// Fails on a category name that is not a valid identifier.
pub fn render_lua<'a, I>(namespace: &str, groups: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a [ItemRecord])>,
{
    let mut lines = vec![format!("{namespace} = {namespace} or {{}}")];
    for (category, records) in groups {
        ensure_category_name(category)?;
        lines.push(format!("{namespace}.{} = {{", category.to_uppercase()));

        let mut by_expansion: BTreeMap<i64, Vec<&ItemRecord>> = BTreeMap::new();
        for record in records {
            by_expansion
                .entry(record.expansion.raw())
                .or_default()
                .push(record);
        }
        for (expansion, mut items) in by_expansion {
            lines.push(format!(
                "   [{expansion}] = {{ -- {}",
                ExpansionId::from_raw(expansion).label()
            ));
            items.sort_by_key(|record| record.id);
            for record in items {
                lines.push(format!(
                    "     [{}] = \"{}\",",
                    record.id,
                    escape_lua_string(&record.name)
                ));
            }
            lines.push("   },".to_string());
        }
        lines.push("}\n".to_string());
    }
    Ok(lines.join("\n"))
}

/// Writes the Lua module(s) for `groups` into `dir` and returns the written paths.
pub fn write_lua<'a, I>(
    dir: &Path,
    namespace: &str,
    groups: I,
    layout: LuaLayout,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = (&'a str, &'a [ItemRecord])>,
{
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    match layout {
        LuaLayout::Merged => {
            let path = dir.join(MERGED_FILE_NAME);
            write_file(&path, &render_lua(namespace, groups)?)?;
            written.push(path);
        }
        LuaLayout::Split => {
            for (category, records) in groups {
                ensure_category_name(category)?;
                let path = dir.join(format!("{category}.lua"));
                write_file(&path, &render_lua(namespace, [(category, records)])?)?;
                written.push(path);
            }
        }
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Lua written");
    Ok(())
}

fn escape_lua_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
