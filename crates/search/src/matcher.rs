//! Per-record predicates for the non-fuzzy modes.
//!
//! All inputs are already normalized and case-folded.

use remedy_core::RemedyRecord;

/// Every token occurs in the common or the Latin field; each token may
/// match a different field.
#[must_use]
pub fn contains_all_tokens(record: &RemedyRecord, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    let common = record.common_normalized_casefold();
    let latin = record.latin_normalized_casefold();
    tokens.iter().all(|t| common.contains(t.as_str()) || latin.contains(t.as_str()))
}

#[must_use]
pub fn starts_with(record: &RemedyRecord, query: &str) -> bool {
    !query.is_empty()
        && (record.common_normalized_casefold().starts_with(query)
            || record.latin_normalized_casefold().starts_with(query))
}

/// Some whitespace-delimited word of either field starts with `token`.
#[must_use]
pub fn word_prefix(record: &RemedyRecord, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let any_word = |text: &str| text.split_whitespace().any(|w| w.starts_with(token));
    any_word(record.common_normalized_casefold()) || any_word(record.latin_normalized_casefold())
}
