//! Shared constants for remedy lookup.
//!
//! Centralizes thresholds and defaults used by both the index and the CLI.

/// Minimum weighted-ratio score (0–100) a fuzzy candidate must reach.
pub const FUZZY_SCORE_CUTOFF: f64 = 60.0;

/// Candidates kept per field pass in fuzzy search.
pub const FUZZY_CANDIDATE_LIMIT: usize = 50;

/// Default number of local suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Preferred header of the Latin-name column.
pub const DEFAULT_LATIN_COLUMN: &str = "latin_col";

/// Preferred header of the common-name column.
pub const DEFAULT_COMMON_COLUMN: &str = "common_col";

/// Backing table used when no path is configured and no workbook exists.
pub const DEFAULT_TABLE_PATH: &str = "remedies.csv";

/// Workbook preferred over [`DEFAULT_TABLE_PATH`] when it exists.
pub const DEFAULT_WORKBOOK_PATH: &str = "remedies.xlsx";

/// Rows written into a freshly created table: `(common, latin)`.
pub const SEED_REMEDIES: &[(&str, &str)] = &[
    ("Arnica", "Arnica montana"),
    ("Bryonia", "Bryonia alba"),
    ("Belladonna", "Atropa belladonna"),
];

/// Boericke Materia Medica base URL; a remedy slug is appended.
pub const MATERIA_MEDICA_BASE_URL: &str =
    "https://www.materiamedica.info/en/materia-medica/william-boericke/";

pub const ENV_TABLE_PATH: &str = "REMEDY_TABLE_PATH";
pub const ENV_LATIN_COLUMN: &str = "REMEDY_LATIN_COLUMN";
pub const ENV_COMMON_COLUMN: &str = "REMEDY_COMMON_COLUMN";
pub const ENV_FUZZY_CUTOFF: &str = "REMEDY_FUZZY_CUTOFF";
pub const ENV_FUZZY_LIMIT: &str = "REMEDY_FUZZY_LIMIT";
