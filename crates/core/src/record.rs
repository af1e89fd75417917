//! Remedy records and the closed enumerations used to query them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::normalize::{fold_case, normalize_name};

/// One row of the remedy table.
///
/// The normalized fields are derived from the raw names at construction and
/// cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RemedyRecord {
    common_name: String,
    latin_name: String,
    common_normalized: String,
    common_normalized_casefold: String,
    latin_normalized_casefold: String,
}

impl RemedyRecord {
    /// Build a record, deriving every normalized form from the raw names.
    ///
    /// Raw names are kept trimmed but otherwise as typed.
    #[must_use]
    pub fn new(common_name: &str, latin_name: &str) -> Self {
        let common_name = common_name.trim().to_owned();
        let latin_name = latin_name.trim().to_owned();
        let common_normalized = normalize_name(&common_name);
        let common_normalized_casefold = fold_case(&common_normalized);
        let latin_normalized_casefold = fold_case(&normalize_name(&latin_name));
        Self {
            common_name,
            latin_name,
            common_normalized,
            common_normalized_casefold,
            latin_normalized_casefold,
        }
    }

    /// `None` unless both names are non-empty after trimming.
    #[must_use]
    pub fn try_new(common_name: &str, latin_name: &str) -> Option<Self> {
        if common_name.trim().is_empty() || latin_name.trim().is_empty() {
            return None;
        }
        Some(Self::new(common_name, latin_name))
    }

    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    #[must_use]
    pub fn latin_name(&self) -> &str {
        &self.latin_name
    }

    #[must_use]
    pub fn common_normalized(&self) -> &str {
        &self.common_normalized
    }

    #[must_use]
    pub fn common_normalized_casefold(&self) -> &str {
        &self.common_normalized_casefold
    }

    #[must_use]
    pub fn latin_normalized_casefold(&self) -> &str {
        &self.latin_normalized_casefold
    }

    /// Case-folded normalized form of the requested field.
    #[must_use]
    pub fn folded(&self, field: NameField) -> &str {
        match field {
            NameField::Common => &self.common_normalized_casefold,
            NameField::Latin => &self.latin_normalized_casefold,
        }
    }

    /// Raw display value of the requested field.
    #[must_use]
    pub fn name(&self, field: NameField) -> &str {
        match field {
            NameField::Common => &self.common_name,
            NameField::Latin => &self.latin_name,
        }
    }
}

impl fmt::Display for RemedyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.common_name, self.latin_name)
    }
}

/// Which of the two name columns a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameField {
    Common,
    Latin,
}

impl NameField {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Common => "common",
            Self::Latin => "latin",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a query is matched against the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Every query token is a substring of either field (per token).
    #[default]
    Contains,
    /// The whole query is a prefix of either field.
    StartsWith,
    /// The first query token prefixes some word of either field.
    WordPrefix,
    /// Weighted-ratio similarity over the raw names.
    Fuzzy,
}

impl MatchMode {
    pub const ALL_VARIANTS_STR: &'static str = "contains|starts-with|word-prefix|fuzzy";

    pub const ALL_VARIANTS: &'static [MatchMode] =
        &[MatchMode::Contains, MatchMode::StartsWith, MatchMode::WordPrefix, MatchMode::Fuzzy];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Contains => "contains",
            Self::StartsWith => "starts-with",
            Self::WordPrefix => "word-prefix",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = CoreError;

    /// Accepts the kebab-case names plus the labels the desktop tools
    /// persisted ("Contains (Excel)", "Starts with", "Word prefix").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .trim_end_matches("(excel)")
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        match key.as_str() {
            "contains" => Ok(Self::Contains),
            "starts-with" | "startswith" | "prefix" => Ok(Self::StartsWith),
            "word-prefix" | "wordprefix" => Ok(Self::WordPrefix),
            "fuzzy" => Ok(Self::Fuzzy),
            _ => Err(CoreError::InvalidMatchMode(s.to_owned())),
        }
    }
}

/// Which name an exact lookup starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Try the Latin column first, then the common column.
    #[default]
    Auto,
    LatinToCommon,
    CommonToLatin,
}

impl Direction {
    pub const ALL_VARIANTS_STR: &'static str = "auto|latin-to-common|common-to-latin";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Auto => "auto",
            Self::LatinToCommon => "latin-to-common",
            Self::CommonToLatin => "common-to-latin",
        }
    }

    /// Fields searched, in order.
    #[must_use]
    pub const fn fields(&self) -> &'static [NameField] {
        match *self {
            Self::Auto => &[NameField::Latin, NameField::Common],
            Self::LatinToCommon => &[NameField::Latin],
            Self::CommonToLatin => &[NameField::Common],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "latin-to-common" | "latin" => Ok(Self::LatinToCommon),
            "common-to-latin" | "common" => Ok(Self::CommonToLatin),
            _ => Err(CoreError::InvalidDirection(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_derives_normalized_fields() {
        let r = RemedyRecord::new("  Nux\u{200D}\u{00A0}Vomica ", "Strychnos  NUX-VOMICA");
        assert_eq!(r.common_name(), "Nux\u{200D}\u{00A0}Vomica");
        assert_eq!(r.common_normalized(), "Nux Vomica");
        assert_eq!(r.common_normalized_casefold(), "nux vomica");
        assert_eq!(r.latin_normalized_casefold(), "strychnos nux-vomica");
    }

    #[test]
    fn try_new_rejects_blank_names() {
        assert!(RemedyRecord::try_new("Arnica", "  ").is_none());
        assert!(RemedyRecord::try_new("", "Arnica montana").is_none());
        assert!(RemedyRecord::try_new("Arnica", "Arnica montana").is_some());
    }

    #[test]
    fn match_mode_parses_desktop_labels() {
        assert_eq!("Contains (Excel)".parse::<MatchMode>(), Ok(MatchMode::Contains));
        assert_eq!("Starts with".parse::<MatchMode>(), Ok(MatchMode::StartsWith));
        assert_eq!("Word-prefix".parse::<MatchMode>(), Ok(MatchMode::WordPrefix));
        assert_eq!("word_prefix".parse::<MatchMode>(), Ok(MatchMode::WordPrefix));
        assert_eq!("FUZZY".parse::<MatchMode>(), Ok(MatchMode::Fuzzy));
    }

    #[test]
    fn match_mode_rejects_unknown() {
        let err = "soundex".parse::<MatchMode>().unwrap_err();
        assert_eq!(err, CoreError::InvalidMatchMode("soundex".to_owned()));
        assert!(err.to_string().contains(MatchMode::ALL_VARIANTS_STR));
    }

    #[test]
    fn name_field_display_matches_serde() {
        for field in [NameField::Common, NameField::Latin] {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.to_string());
        }
    }

    #[test]
    fn match_mode_round_trips_through_as_str() {
        for mode in MatchMode::ALL_VARIANTS {
            assert_eq!(mode.as_str().parse::<MatchMode>(), Ok(*mode));
        }
    }

    #[test]
    fn auto_direction_tries_latin_first() {
        assert_eq!(Direction::Auto.fields(), &[NameField::Latin, NameField::Common]);
        assert_eq!("common".parse::<Direction>(), Ok(Direction::CommonToLatin));
    }

    #[test]
    fn record_serializes_with_all_fields() {
        let r = RemedyRecord::new("Arnica", "Arnica montana");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["common_name"], "Arnica");
        assert_eq!(json["latin_normalized_casefold"], "arnica montana");
    }
}
