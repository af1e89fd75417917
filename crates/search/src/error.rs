//! Typed error enum for the index.

use remedy_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    /// The table could not be read or its name columns resolved.
    #[error("failed to load remedies from {location}: {source}")]
    Load {
        location: String,
        #[source]
        source: StorageError,
    },

    /// Appending a remedy to the backing store failed; nothing was changed in memory.
    #[error("failed to save remedy to {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: StorageError,
    },

    /// A remedy with the same common or Latin name already exists.
    #[error("remedy already exists: {common} ({latin})")]
    Duplicate { common: String, latin: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IndexError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// The underlying storage failure, if any.
    pub fn storage(&self) -> Option<&StorageError> {
        match self {
            Self::Load { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Duplicate { .. } | Self::InvalidInput(_) => None,
        }
    }
}
