//! Storage layer for the remedy table
//!
//! A whole-table, single-writer store: the table is read in full, modified in
//! memory and written back in full. CSV files are handled through polars,
//! Excel workbooks through calamine (read) and rust_xlsxwriter (write).

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod columns;
mod csv_store;
mod error;
mod file_store;
mod store;
mod table;
mod xlsx_store;

pub use columns::{ResolvedColumns, resolve_columns};
pub use csv_store::CsvStore;
pub use error::StorageError;
pub use file_store::FileStore;
pub use store::{MemoryStore, TableStore};
pub use table::Table;
pub use xlsx_store::XlsxStore;
