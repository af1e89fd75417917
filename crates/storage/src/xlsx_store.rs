//! Excel workbook store: calamine reads the first sheet, rust_xlsxwriter
//! writes the whole table back as text cells.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::StorageError;
use crate::file_store::{seed_file, temp_path};
use crate::store::TableStore;
use crate::table::Table;

/// Largest float Excel stores exactly as an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone)]
pub struct XlsxStore {
    path: PathBuf,
}

impl XlsxStore {
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

    /// Create the workbook with the starter remedies if it does not exist yet.
    pub fn create_seeded(&mut self) -> Result<bool, StorageError> {
        let path = self.path.clone();
        seed_file(self, &path)
    }
}

impl TableStore for XlsxStore {
    /// First worksheet, first used row as the header. Rows with no value
    /// in any cell are skipped.
    fn read_table(&self) -> Result<Table, StorageError> {
        if !self.exists() {
            return Err(StorageError::NotFound { path: self.path.clone() });
        }
        let context = self.path.display().to_string();
        let workbook_err = |source| StorageError::Workbook { context: context.clone(), source };

        let mut workbook = open_workbook_auto(&self.path).map_err(workbook_err)?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(workbook_err)?,
            None => return Ok(Table::default()),
        };

        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            return Ok(Table::default());
        };
        let mut table = Table::new(header.iter().map(|c| cell_text(c).unwrap_or_default()).collect());
        for row in rows {
            let values: Vec<Option<String>> = row.iter().map(cell_text).collect();
            if values.iter().any(Option::is_some) {
                table.push_row(values);
            }
        }
        tracing::debug!(path = %context, rows = table.len(), columns = table.columns().len(), "read workbook");
        Ok(table)
    }

    /// Writes to a sibling temp file first, then renames over the original.
    fn write_table(&mut self, table: &Table) -> Result<(), StorageError> {
        let context = self.path.display().to_string();
        let write_err = |source| StorageError::WorkbookWrite { context: context.clone(), source };
        let tmp = temp_path(&self.path);

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in table.columns().iter().enumerate() {
            let (row, col) = cell_position(0, col).map_err(write_err)?;
            sheet.write_string(row, col, name).map_err(write_err)?;
        }
        for (idx, values) in table.rows().iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                let Some(value) = value else { continue };
                let (row, col) = cell_position(idx + 1, col).map_err(write_err)?;
                sheet.write_string(row, col, value).map_err(write_err)?;
            }
        }

        if let Err(e) = workbook.save(&tmp) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }
        fs::rename(&tmp, &self.path)
            .map_err(|source| StorageError::Io { path: self.path.clone(), source })?;
        tracing::debug!(path = %context, rows = table.len(), "wrote workbook");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn cell_position(row: usize, col: usize) -> Result<(u32, u16), XlsxError> {
    let row = u32::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)?;
    let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
    Ok((row, col))
}

/// Cell as text. Whole-number floats print without a fraction so that
/// `30` typed in Excel reads back as `"30"`, not `"30.0"`.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
            Some(format!("{f:.0}"))
        },
        other => Some(other.to_string()),
    }
}
