//! Lookup configuration assembled from defaults and environment variables.

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_COMMON_COLUMN, DEFAULT_LATIN_COLUMN, DEFAULT_TABLE_PATH, DEFAULT_WORKBOOK_PATH,
    ENV_COMMON_COLUMN, ENV_FUZZY_CUTOFF, ENV_FUZZY_LIMIT, ENV_LATIN_COLUMN, ENV_TABLE_PATH,
    FUZZY_CANDIDATE_LIMIT, FUZZY_SCORE_CUTOFF,
};
use crate::env_config::{env_parse_with_default, env_string};

/// Header names the loader tries first (case-insensitive, exact) before
/// falling back to substring heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub latin: String,
    pub common: String,
}

impl ColumnNames {
    #[must_use]
    pub fn new(latin: impl Into<String>, common: impl Into<String>) -> Self {
        Self { latin: latin.into(), common: common.into() }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::new(DEFAULT_LATIN_COLUMN, DEFAULT_COMMON_COLUMN)
    }
}

/// Fuzzy-mode tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// Inclusive score threshold on the 0–100 scale.
    pub fuzzy_cutoff: f64,
    /// Candidates kept per field pass before the cutoff is applied.
    pub fuzzy_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { fuzzy_cutoff: FUZZY_SCORE_CUTOFF, fuzzy_limit: FUZZY_CANDIDATE_LIMIT }
    }
}

/// Everything a host needs to open and query a remedy table.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    pub table_path: PathBuf,
    pub columns: ColumnNames,
    pub search: SearchSettings,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            columns: ColumnNames::default(),
            search: SearchSettings::default(),
        }
    }
}

impl LookupConfig {
    /// Defaults overridden by `REMEDY_*` environment variables.
    ///
    /// Unparseable numeric values are logged and ignored. A non-finite cutoff
    /// falls back to the default; a finite one outside 0–100 is clamped.
    /// Without `REMEDY_TABLE_PATH` the table is [`default_table_path_in`] the
    /// working directory.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = SearchSettings::default();
        let cutoff = env_parse_with_default(ENV_FUZZY_CUTOFF, defaults.fuzzy_cutoff);
        let cutoff = if cutoff.is_finite() {
            cutoff.clamp(0.0, 100.0)
        } else {
            tracing::warn!(
                var = ENV_FUZZY_CUTOFF,
                value = %cutoff,
                default = %defaults.fuzzy_cutoff,
                "non-finite fuzzy cutoff, using default"
            );
            defaults.fuzzy_cutoff
        };
        let limit = env_parse_with_default(ENV_FUZZY_LIMIT, defaults.fuzzy_limit);

        Self {
            table_path: env_string(ENV_TABLE_PATH)
                .map_or_else(|| default_table_path_in(Path::new("")), PathBuf::from),
            columns: ColumnNames::new(
                env_string(ENV_LATIN_COLUMN).unwrap_or_else(|| DEFAULT_LATIN_COLUMN.to_owned()),
                env_string(ENV_COMMON_COLUMN).unwrap_or_else(|| DEFAULT_COMMON_COLUMN.to_owned()),
            ),
            search: SearchSettings { fuzzy_cutoff: cutoff, fuzzy_limit: limit },
        }
    }
}

/// `remedies.xlsx` in `dir` when that file exists, otherwise `remedies.csv`.
#[must_use]
pub fn default_table_path_in(dir: &Path) -> PathBuf {
    let workbook = dir.join(DEFAULT_WORKBOOK_PATH);
    if workbook.is_file() { workbook } else { dir.join(DEFAULT_TABLE_PATH) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_match_seed_headers() {
        let cols = ColumnNames::default();
        assert_eq!(cols.latin, "latin_col");
        assert_eq!(cols.common, "common_col");
    }

    #[test]
    fn default_search_settings() {
        let s = SearchSettings::default();
        assert!((s.fuzzy_cutoff - 60.0).abs() < f64::EPSILON);
        assert_eq!(s.fuzzy_limit, 50);
    }

    #[test]
    fn workbook_is_preferred_when_present() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(default_table_path_in(dir.path()), dir.path().join("remedies.csv"));

        std::fs::write(dir.path().join("remedies.xlsx"), b"").unwrap();
        assert_eq!(default_table_path_in(dir.path()), dir.path().join("remedies.xlsx"));
    }

    // The only test touching REMEDY_* variables; edition 2024 marks env
    // mutation unsafe.
    #[test]
    fn from_env_applies_overrides_and_sanitizes_cutoff() {
        let vars = [
            (ENV_TABLE_PATH, " /srv/remedies.xlsx "),
            (ENV_LATIN_COLUMN, "Latin"),
            (ENV_COMMON_COLUMN, "Common"),
            (ENV_FUZZY_CUTOFF, "75.5"),
            (ENV_FUZZY_LIMIT, "5"),
        ];
        for (var, value) in vars {
            unsafe { std::env::set_var(var, value) };
        }
        let config = LookupConfig::from_env();
        assert_eq!(config.table_path, PathBuf::from("/srv/remedies.xlsx"));
        assert_eq!(config.columns, ColumnNames::new("Latin", "Common"));
        assert!((config.search.fuzzy_cutoff - 75.5).abs() < f64::EPSILON);
        assert_eq!(config.search.fuzzy_limit, 5);

        unsafe { std::env::set_var(ENV_FUZZY_CUTOFF, "250") };
        assert!((LookupConfig::from_env().search.fuzzy_cutoff - 100.0).abs() < f64::EPSILON);

        unsafe { std::env::set_var(ENV_FUZZY_CUTOFF, "-3") };
        assert!(LookupConfig::from_env().search.fuzzy_cutoff.abs() < f64::EPSILON);

        for bad in ["NaN", "inf", "-infinity"] {
            unsafe { std::env::set_var(ENV_FUZZY_CUTOFF, bad) };
            let cutoff = LookupConfig::from_env().search.fuzzy_cutoff;
            assert!((cutoff - 60.0).abs() < f64::EPSILON, "cutoff {bad} became {cutoff}");
        }

        unsafe { std::env::set_var(ENV_FUZZY_LIMIT, "many") };
        assert_eq!(LookupConfig::from_env().search.fuzzy_limit, 50);

        for (var, _) in vars {
            unsafe { std::env::remove_var(var) };
        }
        let config = LookupConfig::from_env();
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.search, SearchSettings::default());
    }
}
