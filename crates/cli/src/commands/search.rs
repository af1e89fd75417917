use anyhow::Result;
use remedy_core::{Direction, LookupConfig, MatchMode, NameField, RemedyRecord};
use serde::Serialize;

use crate::{open_index, print_json};

#[derive(Serialize)]
struct SearchHit<'a> {
    #[serde(flatten)]
    record: &'a RemedyRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<NameField>,
}

#[derive(Serialize)]
struct LookupAnswer<'a> {
    query: &'a str,
    matched: NameField,
    answer: &'a str,
    record: &'a RemedyRecord,
}

pub(crate) fn run_search(
    config: &LookupConfig,
    query: &str,
    mode: MatchMode,
    limit: Option<usize>,
) -> Result<()> {
    let index = open_index(config)?;
    let limit = limit.unwrap_or(usize::MAX);

    let hits: Vec<SearchHit<'_>> = if mode == MatchMode::Fuzzy {
        index
            .fuzzy_matches(query)
            .into_iter()
            .take(limit)
            .map(|m| SearchHit { record: m.record, score: Some(m.score), field: Some(m.field) })
            .collect()
    } else {
        index
            .search(query, mode)
            .into_iter()
            .take(limit)
            .map(|record| SearchHit { record, score: None, field: None })
            .collect()
    };
    tracing::debug!(query, %mode, hits = hits.len(), "search finished");
    print_json(&hits)
}

pub(crate) fn run_lookup(config: &LookupConfig, name: &str, direction: Direction) -> Result<()> {
    let index = open_index(config)?;
    let Some(hit) = index.lookup(name, direction) else {
        anyhow::bail!("no remedy named {name:?} ({direction})");
    };
    print_json(&LookupAnswer {
        query: name,
        matched: hit.matched,
        answer: hit.counterpart(),
        record: hit.record,
    })
}

pub(crate) fn run_suggest(config: &LookupConfig, query: &str, limit: usize) -> Result<()> {
    let index = open_index(config)?;
    print_json(&index.suggest(query, limit))
}
