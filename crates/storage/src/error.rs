//! Typed error enum for the storage layer.

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file does not exist.
    #[error("table not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem failure outside the table codec (rename, create dir).
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be parsed or serialized.
    #[error("malformed table {context}: {source}")]
    Table {
        context: String,
        #[source]
        source: PolarsError,
    },

    /// The workbook could not be opened or its first sheet read.
    #[error("malformed workbook {context}: {source}")]
    Workbook {
        context: String,
        #[source]
        source: calamine::Error,
    },

    /// The workbook could not be encoded or saved.
    #[error("failed to write workbook {context}: {source}")]
    WorkbookWrite {
        context: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Neither exact names nor heuristics identified both name columns.
    #[error(
        "columns not found: wanted latin={wanted_latin:?} common={wanted_common:?}, resolved latin={resolved_latin:?} common={resolved_common:?}, available {available:?}"
    )]
    Columns {
        wanted_latin: String,
        wanted_common: String,
        resolved_latin: Option<String>,
        resolved_common: Option<String>,
        available: Vec<String>,
    },
}

impl StorageError {
    /// Whether the table is simply absent (callers may offer to create it).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether column resolution failed.
    pub fn is_columns(&self) -> bool {
        matches!(self, Self::Columns { .. })
    }

    pub(crate) fn table(context: impl Into<String>, source: PolarsError) -> Self {
        Self::Table { context: context.into(), source }
    }
}
