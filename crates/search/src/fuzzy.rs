//! Weighted-ratio string similarity on a 0–100 scale.
//!
//! Scores are computed over Unicode scalar values after preprocessing
//! (NFC, case folding, ASCII punctuation to spaces, whitespace collapsed),
//! so callers pass raw text.
//!
//! `ratio` is the normalized Indel similarity from `rapidfuzz`; this module
//! only composes it into the partial, token and weighted variants.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;
use remedy_core::fold_case;
use unicode_normalization::UnicodeNormalization;

const UNBASE_SCALE: f64 = 0.95;

/// Preprocess text for scoring.
#[must_use]
pub fn process(text: &str) -> String {
    let folded = fold_case(&text.nfc().collect::<String>());
    let spaced: String = folded
        .chars()
        .map(|c| if c.is_ascii_punctuation() || c.is_control() { ' ' } else { c })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Similarity from an indel distance over a combined length.
fn similarity(distance: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        return 100.0;
    }
    100.0 * (1.0 - distance as f64 / total_len as f64)
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    100.0 * indel::normalized_similarity(a.iter().copied(), b.iter().copied())
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let best = best_window(short, long);
    if short.len() == long.len() && best < 100.0 {
        return best.max(best_window(long, short));
    }
    best
}

/// Best `ratio` of `needle` against every alignment window of `haystack`:
/// growing prefixes, full-length windows, then shrinking suffixes.
/// Windows whose boundary character does not occur in `needle` are skipped.
fn best_window(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let m = haystack.len();
    let chars: BTreeSet<char> = needle.iter().copied().collect();
    let mut best = 0.0_f64;

    for end in 1..n {
        if !chars.contains(&haystack[end - 1]) {
            continue;
        }
        best = best.max(ratio_chars(needle, &haystack[..end]));
        if best >= 100.0 {
            return 100.0;
        }
    }
    for start in 0..=(m - n) {
        if !chars.contains(&haystack[start]) {
            continue;
        }
        best = best.max(ratio_chars(needle, &haystack[start..start + n]));
        if best >= 100.0 {
            return 100.0;
        }
    }
    for start in (m - n + 1)..m {
        if !chars.contains(&haystack[start]) {
            continue;
        }
        best = best.max(ratio_chars(needle, &haystack[start..]));
        if best >= 100.0 {
            return 100.0;
        }
    }
    best
}

fn tokens(text: &str) -> BTreeSet<&str> {
    text.split_whitespace().collect()
}

fn join(set: &BTreeSet<&str>) -> Vec<char> {
    set.iter().copied().collect::<Vec<_>>().join(" ").chars().collect()
}

fn token_sort_ratio_processed(a: &str, b: &str) -> f64 {
    let mut ta: Vec<&str> = a.split_whitespace().collect();
    let mut tb: Vec<&str> = b.split_whitespace().collect();
    ta.sort_unstable();
    tb.sort_unstable();
    let sa: Vec<char> = ta.join(" ").chars().collect();
    let sb: Vec<char> = tb.join(" ").chars().collect();
    ratio_chars(&sa, &sb)
}

fn token_set_ratio_processed(a: &str, b: &str) -> f64 {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let intersect: BTreeSet<&str> = ta.intersection(&tb).copied().collect();
    let diff_ab: BTreeSet<&str> = ta.difference(&tb).copied().collect();
    let diff_ba: BTreeSet<&str> = tb.difference(&ta).copied().collect();

    if !intersect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let ab = join(&diff_ab);
    let ba = join(&diff_ba);
    let sect_len = join(&intersect).len();
    let sep = usize::from(sect_len != 0);
    let sect_ab_len = sect_len + sep + ab.len();
    let sect_ba_len = sect_len + sep + ba.len();

    let diff_distance = indel::distance(ab.iter().copied(), ba.iter().copied());
    let result = similarity(diff_distance, sect_ab_len + sect_ba_len);
    if sect_len == 0 {
        return result;
    }

    // "sect" vs "sect ab" differ only by the appended diff tokens.
    let sect_ab_ratio = similarity(sep + ab.len(), sect_len + sect_ab_len);
    let sect_ba_ratio = similarity(sep + ba.len(), sect_len + sect_ba_len);
    result.max(sect_ab_ratio).max(sect_ba_ratio)
}

fn partial_token_ratio_processed(a: &str, b: &str) -> f64 {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    if ta.intersection(&tb).next().is_some() {
        return 100.0;
    }
    partial_ratio_chars(&join(&ta), &join(&tb))
}

/// Normalized indel similarity of the processed strings.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = process(a).chars().collect();
    let b: Vec<char> = process(b).chars().collect();
    ratio_chars(&a, &b)
}

/// Best alignment of the shorter processed string inside the longer.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = process(a).chars().collect();
    let b: Vec<char> = process(b).chars().collect();
    partial_ratio_chars(&a, &b)
}

#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    token_sort_ratio_processed(&process(a), &process(b))
}

#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_ratio_processed(&process(a), &process(b))
}

/// Weighted ratio: picks the most appropriate of the plain, token and
/// partial measures based on the length ratio of the two strings.
#[must_use]
pub fn wratio(a: &str, b: &str) -> f64 {
    let pa = process(a);
    let pb = process(b);
    let ca: Vec<char> = pa.chars().collect();
    let cb: Vec<char> = pb.chars().collect();
    if ca.is_empty() || cb.is_empty() {
        return 0.0;
    }

    let shorter = ca.len().min(cb.len());
    let longer = ca.len().max(cb.len());
    let len_ratio = longer as f64 / shorter as f64;
    let mut end_ratio = ratio_chars(&ca, &cb);

    if len_ratio < 1.5 {
        let token = token_sort_ratio_processed(&pa, &pb).max(token_set_ratio_processed(&pa, &pb));
        return end_ratio.max(token * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    end_ratio = end_ratio.max(partial_ratio_chars(&ca, &cb) * partial_scale);
    end_ratio.max(partial_token_ratio_processed(&pa, &pb) * UNBASE_SCALE * partial_scale)
}

/// Score `query` against every choice and keep the best `limit`.
///
/// Returns `(choice index, score)` by descending score; equal scores keep
/// choice order. Zero scores are kept, filtering is the caller's concern.
pub fn extract<'a, I>(query: &str, choices: I, limit: usize) -> Vec<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(usize, f64)> =
        choices.into_iter().enumerate().map(|(idx, choice)| (idx, wratio(query, choice))).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}
