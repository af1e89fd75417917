//! Backing-store abstraction and its in-memory implementation.

use crate::error::StorageError;
use crate::table::Table;

/// A single-writer tabular store read and written as a whole.
///
/// No row-level writes: `write_table` replaces the entire contents.
pub trait TableStore {
    fn read_table(&self) -> Result<Table, StorageError>;

    fn write_table(&mut self, table: &Table) -> Result<(), StorageError>;

    /// Human-readable location for diagnostics.
    fn location(&self) -> String;
}

impl<S: TableStore + ?Sized> TableStore for Box<S> {
    fn read_table(&self) -> Result<Table, StorageError> {
        (**self).read_table()
    }

    fn write_table(&mut self, table: &Table) -> Result<(), StorageError> {
        (**self).write_table(table)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Store holding its table in memory; used by embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: Table,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self { table, writes: 0 }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Number of `write_table` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TableStore for MemoryStore {
    fn read_table(&self) -> Result<Table, StorageError> {
        Ok(self.table.clone())
    }

    fn write_table(&mut self, table: &Table) -> Result<(), StorageError> {
        self.table = table.clone();
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_owned()
    }
}
