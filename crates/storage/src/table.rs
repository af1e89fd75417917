//! Row-oriented, string-valued view of the remedy table.

use remedy_core::constants::{DEFAULT_COMMON_COLUMN, DEFAULT_LATIN_COLUMN, SEED_REMEDIES};

use crate::columns::ResolvedColumns;

/// Header row plus data rows. Every cell is optional; a missing cell and an
/// empty cell are equivalent to the index.
///
/// Rows shorter than the header are padded on insertion so that every row
/// has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Table with the default headers and the starter remedies.
    #[must_use]
    pub fn seed() -> Self {
        let mut table =
            Self::new(vec![DEFAULT_COMMON_COLUMN.to_owned(), DEFAULT_LATIN_COLUMN.to_owned()]);
        for (common, latin) in SEED_REMEDIES {
            table.push_row(vec![Some((*common).to_owned()), Some((*latin).to_owned())]);
        }
        table
    }

    /// Two-column table built from `(common, latin)` pairs.
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table =
            Self::new(vec![DEFAULT_COMMON_COLUMN.to_owned(), DEFAULT_LATIN_COLUMN.to_owned()]);
        for (common, latin) in pairs {
            table.push_row(vec![Some(common.to_owned()), Some(latin.to_owned())]);
        }
        table
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value, `None` for missing or out-of-range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut values: Vec<Option<String>>) {
        values.resize(self.columns.len(), None);
        self.rows.push(values);
    }

    /// Append a remedy into the resolved name columns, leaving every other
    /// column empty.
    pub fn push_remedy(&mut self, columns: &ResolvedColumns, common: &str, latin: &str) {
        let mut row = vec![None; self.columns.len()];
        if let Some(cell) = row.get_mut(columns.common_index) {
            *cell = Some(common.to_owned());
        }
        if let Some(cell) = row.get_mut(columns.latin_index) {
            *cell = Some(latin.to_owned());
        }
        self.rows.push(row);
    }

    /// `(common, latin)` cells of each row, in row order.
    pub fn name_pairs<'a>(
        &'a self,
        columns: &'a ResolvedColumns,
    ) -> impl Iterator<Item = (Option<&'a str>, Option<&'a str>)> + 'a {
        (0..self.rows.len()).map(move |row| {
            (self.cell(row, columns.common_index), self.cell(row, columns.latin_index))
        })
    }
}
