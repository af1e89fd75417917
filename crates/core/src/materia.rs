use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MATERIA_MEDICA_BASE_URL;

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\-]").unwrap());

/// Reference-page slug for a Latin remedy name.
///
/// Qualifiers after the first `(` or `,` are dropped: `"Arsenicum album (Ars.)"`
/// becomes `"arsenicum-album"`. Returns `None` when nothing usable is left.
#[must_use]
pub fn materia_medica_slug(latin_name: &str) -> Option<String> {
    let lower = latin_name.to_lowercase();
    let head = lower.split(['(', ',']).next().unwrap_or_default().trim();
    let dashed = head.split_whitespace().collect::<Vec<_>>().join("-");
    let slug = NON_SLUG_CHARS.replace_all(&dashed, "").into_owned();
    (!slug.is_empty()).then_some(slug)
}

#[must_use]
pub fn materia_medica_url(latin_name: &str) -> Option<String> {
    materia_medica_slug(latin_name).map(|slug| format!("{MATERIA_MEDICA_BASE_URL}{slug}"))
}
