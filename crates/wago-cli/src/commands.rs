use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use wago_cli::options::ExtractOptions;
use wago_core::extract;
use wago_ingest::{SourceTable, TableDownloader, TablePaths};
use wago_output::{LuaLayout, write_category_csv, write_lua};

use crate::progress::{ConsoleReporter, DownloadBars, update_download_bar};
use crate::summary::category_table;
use crate::types::{CategorySummary, ExtractResult, OutputFile, OutputKind};

pub fn run_list() -> Result<()> {
    println!("{}", category_table());
    println!("\nUse these with -c/--categories. Semantic keys match on spell category labels.");
    Ok(())
}

pub fn run_extract(options: &ExtractOptions, quiet: bool) -> Result<ExtractResult> {
    let start = Instant::now();
    let span = info_span!("run", output_dir = %options.output_dir.display());
    let _guard = span.enter();

    for dir in [&options.output_dir, &options.raw_dir] {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }

    // Stage 1: source tables
    let paths = fetch_tables(options, quiet)?;

    // Stage 2: join and filter
    let mut reporter = ConsoleReporter::new(quiet);
    let extraction = extract(&paths, &options.categories, &mut reporter).context("extract items")?;

    // Stage 3: export
    let mut files = Vec::new();
    for (category, records) in extraction.groups.iter() {
        if let Some(path) = write_category_csv(&options.output_dir, category, records)
            .with_context(|| format!("write {category}.csv"))?
        {
            files.push(OutputFile {
                kind: OutputKind::Csv,
                path,
                items: Some(records.len()),
            });
        }
    }
    if let Some(lua) = &options.lua {
        let written = write_lua(
            &options.output_dir,
            &lua.namespace,
            extraction.groups.iter(),
            lua.layout,
        )
        .context("write Lua output")?;
        for path in written {
            let items = match lua.layout {
                LuaLayout::Merged => None,
                LuaLayout::Split => path
                    .file_stem()
                    .and_then(|stem| extraction.groups.get(&stem.to_string_lossy()))
                    .map(<[_]>::len),
            };
            files.push(OutputFile {
                kind: OutputKind::Lua,
                path,
                items,
            });
        }
    }

    let categories = options
        .categories
        .iter()
        .map(|request| CategorySummary {
            name: request.name.clone(),
            known: request.key.is_some(),
            items: extraction.groups.get(&request.name).map_or(0, <[_]>::len),
        })
        .collect();
    let elapsed = start.elapsed();
    info!(
        categories = extraction.groups.len(),
        files = files.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "extraction finished"
    );
    Ok(ExtractResult {
        output_dir: options.output_dir.clone(),
        categories,
        files,
        stats: extraction.stats,
        elapsed,
    })
}

/// Downloads every source table, or checks the cache when offline.
fn fetch_tables(options: &ExtractOptions, quiet: bool) -> Result<TablePaths> {
    let paths = TablePaths::in_dir(&options.raw_dir);
    if options.offline {
        let missing = paths.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|table| table.name()).collect();
            warn!(
                raw_dir = %options.raw_dir.display(),
                missing = %names.join(", "),
                "cache incomplete"
            );
        }
        paths
            .require_cached()
            .context("offline mode needs every table in the raw cache")?;
        info!(raw_dir = %options.raw_dir.display(), "using cached tables");
        return Ok(paths);
    }

    let downloader = TableDownloader::new(options.base_url.as_str()).context("create HTTP client")?;
    let bars = DownloadBars::new(quiet);
    for table in SourceTable::ALL {
        let bar = bars.table_bar(table);
        let result = downloader.download(table, &options.raw_dir, |progress| {
            update_download_bar(&bar, progress);
        });
        match result {
            Ok(_) => bar.finish(),
            Err(error) => {
                bar.abandon_with_message("failed");
                warn!(table = %table, %error, "download failed");
                return Err(error).with_context(|| format!("download {table}"));
            }
        }
    }
    Ok(paths)
}
