//! CSV-file store backed by polars.
//!
//! Every column is read as a string (schema inference disabled) so that
//! numeric-looking cells in extra columns round-trip unchanged.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::error::StorageError;
use crate::file_store::{seed_file, temp_path};
use crate::store::TableStore;
use crate::table::Table;

#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the file with the starter remedies if it does not exist yet.
    ///
    /// Returns `true` when a file was written; an existing file is left alone.
    pub fn create_seeded(&mut self) -> Result<bool, StorageError> {
        let path = self.path.clone();
        seed_file(self, &path)
    }
}

impl TableStore for CsvStore {
    fn read_table(&self) -> Result<Table, StorageError> {
        if !self.exists() {
            return Err(StorageError::NotFound { path: self.path.clone() });
        }
        let context = self.path.display().to_string();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| StorageError::table(context.clone(), e))?
            .finish()
            .map_err(|e| StorageError::table(context.clone(), e))?;
        let table = dataframe_to_table(&df, &context)?;
        tracing::debug!(path = %context, rows = table.len(), columns = table.columns().len(), "read table");
        Ok(table)
    }

    /// Writes to a sibling temp file first, then renames over the original.
    fn write_table(&mut self, table: &Table) -> Result<(), StorageError> {
        let context = self.path.display().to_string();
        let mut df = table_to_dataframe(table, &context)?;
        let tmp = temp_path(&self.path);

        let mut file =
            File::create(&tmp).map_err(|source| StorageError::Io { path: tmp.clone(), source })?;
        let encoded = CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| StorageError::table(context.clone(), e));
        let written = encoded.and_then(|()| {
            file.sync_all().map_err(|source| StorageError::Io { path: tmp.clone(), source })
        });
        drop(file);
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        fs::rename(&tmp, &self.path)
            .map_err(|source| StorageError::Io { path: self.path.clone(), source })?;
        tracing::debug!(path = %context, rows = table.len(), "wrote table");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn dataframe_to_table(df: &DataFrame, context: &str) -> Result<Table, StorageError> {
    let columns: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
    let mut rows: Vec<Vec<Option<String>>> = vec![Vec::with_capacity(columns.len()); df.height()];

    for name in &columns {
        let values = df
            .column(name)
            .and_then(|c| c.str())
            .map_err(|e| StorageError::table(format!("{context} column {name:?}"), e))?;
        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            row.push(value.map(str::to_owned));
        }
    }

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row);
    }
    Ok(table)
}

fn table_to_dataframe(table: &Table, context: &str) -> Result<DataFrame, StorageError> {
    let columns: Vec<Column> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<&str>> =
                table.rows().iter().map(|row| row.get(idx).and_then(|v| v.as_deref())).collect();
            Column::new(PlSmallStr::from(name.as_str()), values)
        })
        .collect();
    DataFrame::new(columns).map_err(|e| StorageError::table(context.to_owned(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("absent.csv"));
        let err = store.read_table().unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn create_seeded_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("remedies.csv");
        let mut store = CsvStore::new(&path);
        assert!(store.create_seeded().unwrap());
        assert!(!store.create_seeded().unwrap());
        assert_eq!(store.read_table().unwrap(), Table::seed());
        assert!(!temp_path(&path).exists());
    }
}
