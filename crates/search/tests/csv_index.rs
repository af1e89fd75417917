//! End-to-end index behavior over a CSV file on disk.

#![expect(clippy::unwrap_used, reason = "test code")]

use std::fs;
use std::path::Path;

use remedy_core::{ColumnNames, MatchMode, SearchSettings};
use remedy_search::RemedyIndex;
use remedy_storage::CsvStore;

fn write_csv(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn open(path: &Path) -> RemedyIndex<CsvStore> {
    RemedyIndex::load(CsvStore::new(path), ColumnNames::default(), SearchSettings::default())
        .unwrap()
}

#[test]
fn added_remedy_is_persisted_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remedies.csv");
    write_csv(&path, "common_col,latin_col\nArnica,Arnica montana\n");

    let mut index = open(&path);
    assert!(index.add("Bryonia", "Bryonia alba").unwrap().created);
    assert!(!index.add("bryonia", "Bryonia alba").unwrap().created);

    let reopened = open(&path);
    let hits = reopened.search("bryonia", MatchMode::Contains);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].latin_name(), "Bryonia alba");
    assert_eq!(reopened.records().last().unwrap().common_name(), "Bryonia");
}

#[test]
fn add_keeps_unrelated_columns_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remedies.csv");
    write_csv(&path, "latin_col,potency,common_col\nArnica montana,030,Arnica\n");

    let mut index = open(&path);
    index.add("Sulphur", "Sulphur").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("latin_col,potency,common_col"));
    assert_eq!(lines.next(), Some("Arnica montana,030,Arnica"));
    assert_eq!(lines.next(), Some("Sulphur,,Sulphur"));
    assert_eq!(lines.next(), None);
}

#[test]
fn failed_reload_keeps_current_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remedies.csv");
    write_csv(&path, "common_col,latin_col\nArnica,Arnica montana\nBryonia,Bryonia alba\n");

    let mut index = open(&path);
    fs::remove_file(&path).unwrap();

    let err = index.reload().unwrap_err();
    assert!(err.is_load_failure());
    assert!(err.storage().is_some_and(|e| e.is_not_found()));
    assert_eq!(index.len(), 2);
    assert_eq!(index.search("bry", MatchMode::StartsWith).len(), 1);
}

#[test]
fn reload_sees_external_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remedies.csv");
    write_csv(&path, "common_col,latin_col\nArnica,Arnica montana\n");

    let mut index = open(&path);
    write_csv(&path, "common_col,latin_col\nArnica,Arnica montana\nআর্নিকা,Arnica tincture\n");

    assert_eq!(index.reload().unwrap(), 2);
    assert_eq!(index.search("আর্নি", MatchMode::StartsWith).len(), 1);
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err =
        RemedyIndex::load(CsvStore::new(&path), ColumnNames::default(), SearchSettings::default())
            .err()
            .unwrap();
    assert!(err.is_load_failure());
    assert!(err.to_string().contains("absent.csv"), "unexpected message: {err}");
}

#[test]
fn seeded_table_answers_the_starter_queries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("remedies.csv");
    let mut store = CsvStore::new(&path);
    assert!(store.create_seeded().unwrap());

    let index = open(&path);
    assert_eq!(index.len(), 3);
    let hits = index.search("bell", MatchMode::WordPrefix);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].common_name(), "Belladonna");
    assert!(index.search("xyz", MatchMode::Fuzzy).is_empty());
}
