use std::fs;

use remedy_core::ColumnNames;
use remedy_storage::{CsvStore, StorageError, Table, TableStore, resolve_columns};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> CsvStore {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    CsvStore::new(path)
}

#[test]
fn reads_every_column_as_text() {
    let dir = TempDir::new().unwrap();
    let store = write_file(
        &dir,
        "remedies.csv",
        "Latin,Common,Potency\nArnica montana,আর্নিকা,030\n\"Nux vomica, strychnos\",Nux,6\n",
    );

    let table = store.read_table().unwrap();
    assert_eq!(table.columns(), &["Latin", "Common", "Potency"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(0, 1), Some("আর্নিকা"));
    assert_eq!(table.cell(0, 2), Some("030"));
    assert_eq!(table.cell(1, 0), Some("Nux vomica, strychnos"));
}

#[test]
fn empty_cells_read_as_missing() {
    let dir = TempDir::new().unwrap();
    let store = write_file(&dir, "gaps.csv", "common_col,latin_col\nArnica,\n,Bryonia alba\n");

    let table = store.read_table().unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.cell(0, 1).is_none_or(str::is_empty));
    assert!(table.cell(1, 0).is_none_or(str::is_empty));
}

#[test]
fn append_round_trip_preserves_extra_columns_and_order() {
    let dir = TempDir::new().unwrap();
    let mut store = write_file(
        &dir,
        "remedies.csv",
        "potency,latin_col,common_col\n30C,Arnica montana,Arnica\n",
    );

    let mut table = store.read_table().unwrap();
    let cols = resolve_columns(table.columns(), &ColumnNames::default()).unwrap();
    table.push_remedy(&cols, "Bryonia", "Bryonia alba");
    store.write_table(&table).unwrap();

    let reread = store.read_table().unwrap();
    assert_eq!(reread.columns(), &["potency", "latin_col", "common_col"]);
    assert_eq!(reread.len(), 2);
    assert_eq!(reread.cell(0, 0), Some("30C"));
    assert_eq!(reread.cell(1, 1), Some("Bryonia alba"));
    assert_eq!(reread.cell(1, 2), Some("Bryonia"));
}

#[test]
fn header_only_file_is_an_empty_table() {
    let dir = TempDir::new().unwrap();
    let store = write_file(&dir, "empty.csv", "common_col,latin_col\n");
    let table = store.read_table().unwrap();
    assert_eq!(table.columns().len(), 2);
    assert!(table.is_empty());
}

#[test]
fn seeded_table_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvStore::new(dir.path().join("seed.csv"));
    assert!(store.create_seeded().unwrap());
    assert_eq!(store.read_table().unwrap(), Table::seed());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("nope.csv"));
    match store.read_table() {
        Err(StorageError::NotFound { path }) => assert!(path.ends_with("nope.csv")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
