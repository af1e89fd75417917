//! File-backed stores chosen by extension, plus helpers they share.

use std::fs;
use std::path::{Path, PathBuf};

use crate::csv_store::CsvStore;
use crate::error::StorageError;
use crate::store::TableStore;
use crate::table::Table;
use crate::xlsx_store::XlsxStore;

/// Extensions read and written as Excel workbooks.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm"];

/// A CSV or Excel table, picked from the file extension.
#[derive(Debug, Clone)]
pub enum FileStore {
    Csv(CsvStore),
    Xlsx(XlsxStore),
}

impl FileStore {
    /// `.xlsx` / `.xlsm` (any case) open as a workbook, everything else as CSV.
    #[must_use]
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_workbook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)));
        if is_workbook { Self::Xlsx(XlsxStore::new(path)) } else { Self::Csv(CsvStore::new(path)) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Csv(store) => store.path(),
            Self::Xlsx(store) => store.path(),
        }
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    #[must_use]
    pub fn is_workbook(&self) -> bool {
        matches!(self, Self::Xlsx(_))
    }

    /// See [`CsvStore::create_seeded`].
    pub fn create_seeded(&mut self) -> Result<bool, StorageError> {
        match self {
            Self::Csv(store) => store.create_seeded(),
            Self::Xlsx(store) => store.create_seeded(),
        }
    }
}

impl TableStore for FileStore {
    fn read_table(&self) -> Result<Table, StorageError> {
        match self {
            Self::Csv(store) => store.read_table(),
            Self::Xlsx(store) => store.read_table(),
        }
    }

    fn write_table(&mut self, table: &Table) -> Result<(), StorageError> {
        match self {
            Self::Csv(store) => store.write_table(table),
            Self::Xlsx(store) => store.write_table(table),
        }
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}

/// Sibling path a table is written to before being renamed into place.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the starter table to `path` through `store` unless the file exists.
pub(crate) fn seed_file<S: TableStore>(store: &mut S, path: &Path) -> Result<bool, StorageError> {
    if path.is_file() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
    }
    store.write_table(&Table::seed())?;
    tracing::info!(path = %path.display(), "created seeded remedy table");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_sibling() {
        let p = temp_path(Path::new("/data/remedies.csv"));
        assert_eq!(p, PathBuf::from("/data/remedies.csv.tmp"));
    }

    #[test]
    fn extension_selects_backend() {
        assert!(FileStore::for_path("remedies.xlsx").is_workbook());
        assert!(FileStore::for_path("/srv/Remedies.XLSX").is_workbook());
        assert!(FileStore::for_path("macros.xlsm").is_workbook());
        assert!(!FileStore::for_path("remedies.csv").is_workbook());
        assert!(!FileStore::for_path("remedies").is_workbook());
    }

    #[test]
    fn location_is_the_path() {
        let store = FileStore::for_path("data/remedies.xlsx");
        assert_eq!(store.location(), Path::new("data/remedies.xlsx").display().to_string());
        assert_eq!(store.path(), Path::new("data/remedies.xlsx"));
    }
}
