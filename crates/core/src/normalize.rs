//! Text normalization pipeline applied to stored names and queries alike.
//!
//! `normalize_name`: NFC, strip invisible joiners and format characters,
//! non-breaking spaces to ordinary spaces, collapse whitespace, trim.
//! `fold_case`: full Unicode case folding, recomposed to NFC.

use unicode_normalization::UnicodeNormalization;

/// Zero-width and format characters that never contribute to a name.
const INVISIBLE: &[char] = &[
    '\u{00AD}', // soft hyphen
    '\u{200B}', // zero width space
    '\u{200C}', // ZWNJ
    '\u{200D}', // ZWJ
    '\u{2060}', // word joiner
    '\u{FEFF}', // BOM / ZWNBSP
];

/// Non-breaking space variants typed or pasted into spreadsheets.
const NO_BREAK_SPACES: &[char] = &['\u{00A0}', '\u{2007}', '\u{202F}'];

#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let cleaned: String = raw
        .nfc()
        .filter(|c| !INVISIBLE.contains(c))
        .map(|c| if NO_BREAK_SPACES.contains(&c) { ' ' } else { c })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case folding is not lowercasing: `ß` folds to `ss`, final sigma to `σ`.
#[must_use]
pub fn fold_case(text: &str) -> String {
    caseless::default_case_fold_str(text).nfc().collect()
}

/// The form a query takes before substring/prefix matching.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    fold_case(&normalize_name(query))
}

/// Whitespace tokens of the normalized, case-folded query.
#[must_use]
pub fn query_tokens(query: &str) -> Vec<String> {
    normalize_query(query).split_whitespace().map(str::to_owned).collect()
}
