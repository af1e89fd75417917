use anyhow::{Context, Result};
use remedy_core::LookupConfig;
use remedy_storage::FileStore;
use serde::Serialize;

use crate::{open_index, print_json};

#[derive(Serialize)]
struct InitReport {
    path: String,
    created: bool,
}

#[derive(Serialize)]
struct TableStats<'a> {
    path: String,
    format: &'static str,
    records: usize,
    latin_column: &'a str,
    common_column: &'a str,
    fuzzy_cutoff: f64,
    fuzzy_limit: usize,
}

pub(crate) fn run_add(config: &LookupConfig, common: &str, latin: &str) -> Result<()> {
    let mut index = open_index(config)?;
    let outcome = index.add(common, latin)?;
    if !outcome.created {
        eprintln!("Already registered: {}", outcome.record);
    }
    print_json(&outcome)
}

pub(crate) fn run_init(config: &LookupConfig) -> Result<()> {
    let mut store = FileStore::for_path(&config.table_path);
    let created = store
        .create_seeded()
        .with_context(|| format!("cannot create {}", config.table_path.display()))?;
    print_json(&InitReport { path: config.table_path.display().to_string(), created })
}

pub(crate) fn run_stats(config: &LookupConfig) -> Result<()> {
    let index = open_index(config)?;
    let columns = index.columns();
    let settings = index.settings();
    print_json(&TableStats {
        path: config.table_path.display().to_string(),
        format: if index.store().is_workbook() { "xlsx" } else { "csv" },
        records: index.len(),
        latin_column: &columns.latin_header,
        common_column: &columns.common_header,
        fuzzy_cutoff: settings.fuzzy_cutoff,
        fuzzy_limit: settings.fuzzy_limit,
    })
}
