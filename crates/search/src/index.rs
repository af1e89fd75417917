//! The in-memory remedy index.

use std::collections::HashSet;

use remedy_core::{
    ColumnNames, Direction, LookupConfig, MatchMode, NameField, RemedyRecord, SearchSettings,
    normalize_query, query_tokens,
};
use remedy_storage::{ResolvedColumns, StorageError, Table, TableStore, resolve_columns};
use serde::Serialize;

use crate::error::IndexError;
use crate::fuzzy;
use crate::matcher;

/// Ordered remedy records over a backing store.
///
/// Record order is table row order, followed by remedies added this session
/// in append order. The index exclusively owns its store; callers serialize
/// `add` calls.
pub struct RemedyIndex<S: TableStore> {
    store: S,
    wanted: ColumnNames,
    settings: SearchSettings,
    resolved: ResolvedColumns,
    records: Vec<RemedyRecord>,
}

/// Result of [`RemedyIndex::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    /// The new record, or the existing one that blocked the insert.
    pub record: RemedyRecord,
    pub created: bool,
}

impl AddOutcome {
    /// Treat a blocked insert as an error.
    pub fn into_created(self) -> Result<RemedyRecord, IndexError> {
        if self.created {
            Ok(self.record)
        } else {
            Err(IndexError::Duplicate {
                common: self.record.common_name().to_owned(),
                latin: self.record.latin_name().to_owned(),
            })
        }
    }
}

/// A fuzzy hit with the field pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    pub record: &'a RemedyRecord,
    pub field: NameField,
    pub score: f64,
}

/// An exact name lookup hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExactMatch<'a> {
    pub record: &'a RemedyRecord,
    /// Field the query matched; the answer is the other one.
    pub matched: NameField,
}

impl ExactMatch<'_> {
    /// The name on the other side of the match.
    #[must_use]
    pub fn counterpart(&self) -> &str {
        match self.matched {
            NameField::Latin => self.record.common_name(),
            NameField::Common => self.record.latin_name(),
        }
    }
}

/// A name suggested from the combined common and Latin name list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub score: f64,
}

/// Build records from a table, dropping rows without both names.
fn build_records(
    table: &Table,
    wanted: &ColumnNames,
) -> Result<(ResolvedColumns, Vec<RemedyRecord>), StorageError> {
    let resolved = resolve_columns(table.columns(), wanted)?;
    let records: Vec<RemedyRecord> = table
        .name_pairs(&resolved)
        .filter_map(|(common, latin)| RemedyRecord::try_new(common?, latin?))
        .collect();

    let dropped = table.len().saturating_sub(records.len());
    if dropped > 0 {
        tracing::debug!(dropped, "skipped rows missing a common or latin name");
    }
    Ok((resolved, records))
}

impl<S: TableStore> RemedyIndex<S> {
    /// Read the whole table from `store` and index it.
    pub fn load(
        store: S,
        wanted: ColumnNames,
        settings: SearchSettings,
    ) -> Result<Self, IndexError> {
        let location = store.location();
        let load_err = |source| IndexError::Load { location: location.clone(), source };
        let table = store.read_table().map_err(load_err)?;
        let (resolved, records) = build_records(&table, &wanted).map_err(load_err)?;

        tracing::info!(
            location = %location,
            records = records.len(),
            latin = %resolved.latin_header,
            common = %resolved.common_header,
            "loaded remedy index"
        );
        Ok(Self { store, wanted, settings, resolved, records })
    }

    /// [`Self::load`] with column names and fuzzy settings from `config`.
    pub fn open(store: S, config: &LookupConfig) -> Result<Self, IndexError> {
        Self::load(store, config.columns.clone(), config.search)
    }

    /// Rebuild from the store. On failure the current contents are kept.
    pub fn reload(&mut self) -> Result<usize, IndexError> {
        let location = self.store.location();
        let load_err = |source| IndexError::Load { location: location.clone(), source };
        let table = self.store.read_table().map_err(load_err)?;
        let (resolved, records) = build_records(&table, &self.wanted).map_err(load_err)?;

        self.resolved = resolved;
        self.records = records;
        tracing::info!(location = %location, records = self.records.len(), "reloaded remedy index");
        Ok(self.records.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[RemedyRecord] {
        &self.records
    }

    /// Header names the name columns resolved to on the last load or add.
    #[must_use]
    pub fn columns(&self) -> &ResolvedColumns {
        &self.resolved
    }

    #[must_use]
    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run `query` in `mode`.
    ///
    /// A blank query yields no results. Contains, starts-with and word-prefix
    /// results are in index order; fuzzy results are common-name hits by
    /// descending score followed by new Latin-name hits by descending score.
    #[must_use]
    pub fn search(&self, query: &str, mode: MatchMode) -> Vec<&RemedyRecord> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        match mode {
            MatchMode::Contains => {
                let tokens = query_tokens(trimmed);
                self.filter(|r| matcher::contains_all_tokens(r, &tokens))
            },
            MatchMode::StartsWith => {
                let folded = normalize_query(trimmed);
                self.filter(|r| matcher::starts_with(r, &folded))
            },
            MatchMode::WordPrefix => {
                let tokens = query_tokens(trimmed);
                match tokens.first() {
                    Some(first) => self.filter(|r| matcher::word_prefix(r, first)),
                    None => Vec::new(),
                }
            },
            MatchMode::Fuzzy => self.fuzzy_matches(trimmed).into_iter().map(|m| m.record).collect(),
        }
    }

    fn filter<F>(&self, predicate: F) -> Vec<&RemedyRecord>
    where
        F: Fn(&RemedyRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Fuzzy hits with their scores, in the order [`Self::search`] returns them.
    ///
    /// The raw query is scored against the raw common names, then the raw
    /// Latin names, each pass capped at the configured candidate limit.
    /// Candidates under the cutoff are dropped and a record already found by
    /// the common pass is not repeated.
    #[must_use]
    pub fn fuzzy_matches(&self, query: &str) -> Vec<ScoredMatch<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let SearchSettings { fuzzy_cutoff, fuzzy_limit } = self.settings;
        let mut seen: HashSet<usize> = HashSet::new();
        let mut matches = Vec::new();

        for field in [NameField::Common, NameField::Latin] {
            let before = matches.len();
            let names = self.records.iter().map(|r| r.name(field));
            for (idx, score) in fuzzy::extract(query, names, fuzzy_limit) {
                if score < fuzzy_cutoff || !seen.insert(idx) {
                    continue;
                }
                if let Some(record) = self.records.get(idx) {
                    matches.push(ScoredMatch { record, field, score });
                }
            }
            tracing::debug!(field = field.as_str(), added = matches.len() - before, "fuzzy pass");
        }
        matches
    }

    /// Exact, case-insensitive name lookup.
    ///
    /// `Auto` checks Latin names before common names; the first record in
    /// index order wins within a field.
    #[must_use]
    pub fn lookup(&self, name: &str, direction: Direction) -> Option<ExactMatch<'_>> {
        let folded = normalize_query(name);
        if folded.is_empty() {
            return None;
        }
        direction.fields().iter().find_map(|&field| {
            self.records
                .iter()
                .find(|r| r.folded(field) == folded)
                .map(|record| ExactMatch { record, matched: field })
        })
    }

    /// Closest names across both columns, best first.
    ///
    /// Candidates are every distinct common name followed by every distinct
    /// Latin name; zero scores are omitted.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let names: Vec<&str> = self
            .records
            .iter()
            .map(RemedyRecord::common_name)
            .chain(self.records.iter().map(RemedyRecord::latin_name))
            .filter(|name| seen.insert(*name))
            .collect();

        fuzzy::extract(query, names.iter().copied(), limit)
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .filter_map(|(idx, score)| {
                names.get(idx).map(|name| Suggestion { name: (*name).to_owned(), score })
            })
            .collect()
    }

    fn find_duplicate(&self, candidate: &RemedyRecord) -> Option<&RemedyRecord> {
        self.records.iter().find(|r| {
            r.common_normalized_casefold() == candidate.common_normalized_casefold()
                || r.latin_normalized_casefold() == candidate.latin_normalized_casefold()
        })
    }

    /// Register a new remedy.
    ///
    /// If either name already exists (case-insensitively) nothing is written
    /// and the existing record comes back with `created == false`. Otherwise
    /// the whole table is re-read, the row appended and the table written
    /// back before the record joins the index.
    pub fn add(&mut self, common_name: &str, latin_name: &str) -> Result<AddOutcome, IndexError> {
        let Some(candidate) = RemedyRecord::try_new(common_name, latin_name) else {
            return Err(IndexError::InvalidInput(
                "both common and latin names are required".to_owned(),
            ));
        };

        if let Some(existing) = self.find_duplicate(&candidate) {
            tracing::info!(
                common = %candidate.common_name(),
                latin = %candidate.latin_name(),
                existing = %existing,
                "remedy already registered, skipping write"
            );
            return Ok(AddOutcome { record: existing.clone(), created: false });
        }

        let location = self.store.location();
        let write_err = |source| IndexError::Write { location: location.clone(), source };
        let mut table = self.store.read_table().map_err(write_err)?;
        let resolved = resolve_columns(table.columns(), &self.wanted).map_err(write_err)?;
        table.push_remedy(&resolved, candidate.common_name(), candidate.latin_name());
        self.store.write_table(&table).map_err(write_err)?;

        tracing::info!(location = %location, remedy = %candidate, "added remedy");
        self.resolved = resolved;
        self.records.push(candidate.clone());
        Ok(AddOutcome { record: candidate, created: true })
    }
}
