//! Locating the Latin and common name columns in an arbitrary header row.

use remedy_core::ColumnNames;

use crate::error::StorageError;

/// Positions and header names of the two name columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub latin_index: usize,
    pub common_index: usize,
    pub latin_header: String,
    pub common_header: String,
}

fn header_key(header: &str) -> String {
    header.trim_start_matches('\u{FEFF}').trim().to_lowercase()
}

fn find_exact(keys: &[String], wanted: &str) -> Option<usize> {
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    keys.iter().rposition(|k| *k == wanted)
}

fn find_latin_fallback(keys: &[String]) -> Option<usize> {
    keys.iter().position(|k| k.contains("latin"))
}

fn find_common_fallback(keys: &[String]) -> Option<usize> {
    keys.iter().position(|k| k.contains("common") || k.contains("english") || k == "name")
}

/// Resolve both name columns.
///
/// Exact case-insensitive header matches win, the last one when a header
/// repeats. Otherwise Latin is the first header containing `latin`, common
/// the first containing `common` or `english` or equal to `name`. Both sides must resolve, to different
/// columns.
pub fn resolve_columns(
    headers: &[String],
    wanted: &ColumnNames,
) -> Result<ResolvedColumns, StorageError> {
    let keys: Vec<String> = headers.iter().map(|h| header_key(h)).collect();

    let latin = find_exact(&keys, &wanted.latin).or_else(|| {
        let found = find_latin_fallback(&keys);
        if let Some(idx) = found {
            tracing::debug!(header = %headers[idx], "latin column resolved by heuristic");
        }
        found
    });
    let common = find_exact(&keys, &wanted.common).or_else(|| {
        let found = find_common_fallback(&keys);
        if let Some(idx) = found {
            tracing::debug!(header = %headers[idx], "common column resolved by heuristic");
        }
        found
    });

    match (latin, common) {
        (Some(latin_index), Some(common_index)) if latin_index != common_index => {
            Ok(ResolvedColumns {
                latin_index,
                common_index,
                latin_header: headers[latin_index].clone(),
                common_header: headers[common_index].clone(),
            })
        },
        _ => Err(StorageError::Columns {
            wanted_latin: wanted.latin.clone(),
            wanted_common: wanted.common.clone(),
            resolved_latin: latin.map(|i| headers[i].clone()),
            resolved_common: common.map(|i| headers[i].clone()),
            available: headers.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let h = headers(&["Common_Col", " LATIN_COL "]);
        let cols = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(cols.common_index, 0);
        assert_eq!(cols.latin_index, 1);
        assert_eq!(cols.latin_header, " LATIN_COL ");
    }

    #[test]
    fn repeated_exact_header_resolves_to_last() {
        let h = headers(&["latin_col", "common_col", "Latin_Col"]);
        let cols = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(cols.latin_index, 2);
        assert_eq!(cols.latin_header, "Latin_Col");
        assert_eq!(cols.common_index, 1);
    }

    #[test]
    fn exact_match_beats_heuristic() {
        let h = headers(&["latin notes", "Latin", "Common"]);
        let cols = resolve_columns(&h, &ColumnNames::new("Latin", "Common")).unwrap();
        assert_eq!(cols.latin_index, 1);
        assert_eq!(cols.common_index, 2);
    }

    #[test]
    fn falls_back_to_substring_heuristics() {
        let h = headers(&["Latin Name", "English"]);
        let cols = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(cols.latin_index, 0);
        assert_eq!(cols.common_index, 1);

        let h = headers(&["name", "latin"]);
        let cols = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(cols.common_index, 0);
        assert_eq!(cols.latin_index, 1);
    }

    #[test]
    fn bom_on_first_header_is_ignored() {
        let h = headers(&["\u{FEFF}common_col", "latin_col"]);
        let cols = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(cols.common_index, 0);
    }

    #[test]
    fn unresolved_columns_report_available_headers() {
        let h = headers(&["remedy", "potency"]);
        let err = resolve_columns(&h, &ColumnNames::default()).unwrap_err();
        assert!(err.is_columns());
        let msg = err.to_string();
        assert!(msg.contains("columns not found"), "{msg}");
        assert!(msg.contains("remedy") && msg.contains("potency"), "{msg}");
        assert!(msg.contains("latin_col"), "{msg}");
    }

    #[test]
    fn same_column_for_both_is_ambiguous() {
        let h = headers(&["common latin name"]);
        let err = resolve_columns(&h, &ColumnNames::default()).unwrap_err();
        match err {
            StorageError::Columns { resolved_latin, resolved_common, .. } => {
                assert_eq!(resolved_latin.as_deref(), Some("common latin name"));
                assert_eq!(resolved_common.as_deref(), Some("common latin name"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }
}
