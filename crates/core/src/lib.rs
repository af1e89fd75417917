//! Core types for remedy lookup
//!
//! Domain records, match modes, the text normalization pipeline and
//! configuration shared by the storage, search and CLI crates.

mod config;
pub mod constants;
mod env_config;
mod error;
mod materia;
mod normalize;
mod record;

pub use config::{ColumnNames, LookupConfig, SearchSettings, default_table_path_in};
pub use env_config::env_parse_with_default;
pub use error::*;
pub use materia::{materia_medica_slug, materia_medica_url};
pub use normalize::{fold_case, normalize_name, normalize_query, query_tokens};
pub use record::*;
