// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search orchestrator: where the rubber meets the road.
//!
//! One pass over the candidate snapshot, chunked and cooperatively yielding.
//! Per candidate: cheap signals always, fuzzy proximity when the guard below
//! permits, retain on a positive total, and feed strong matches to the
//! suggestion generator. After the scan: stable sort descending by score,
//! truncate both lists to the mode's caps.
//!
//! Each call is a pure function of (query, candidates, mode) plus the scoring
//! constants - no state survives between calls, and concurrent calls over a
//! shared snapshot are safe because every accumulator lives on this stack
//! frame.

use std::collections::HashSet;

use crate::batch::for_each_chunk;
use crate::query::NormalizedQuery;
use crate::scoring::{self, STRONG_MATCH_THRESHOLD, WEAK_SCORE_FLOOR};
use crate::suggest::suggestions_for;
use crate::types::{CatalogRecord, SearchHit, SearchMode, SearchOutcome, Suggestion};

/// Rank `candidates` against `query`, returning capped results and
/// suggestions.
///
/// Total over its input domain: an empty or whitespace-only query, an empty
/// catalog, and records with empty fields all produce an empty (or partial)
/// outcome, never an error. The future suspends only at chunk boundaries;
/// dropping it there cancels the search with nothing to clean up.
pub async fn search<'a>(
    raw_query: &str,
    candidates: &'a [CatalogRecord],
    mode: SearchMode,
) -> SearchOutcome<'a> {
    let query = NormalizedQuery::parse(raw_query);
    if query.is_empty() {
        return SearchOutcome::default();
    }

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    let mut suggestions: Vec<Suggestion> = Vec::new();
    let mut seen_suggestions: HashSet<String> = HashSet::new();

    for_each_chunk(candidates, mode.chunk_size(), |chunk| {
        for record in chunk {
            let cheap = scoring::cheap_score(record, &query);
            let total = if fuzzy_permitted(mode, cheap, hits.len()) {
                cheap + scoring::fuzzy_score(record, &query)
            } else {
                cheap
            };

            if total <= 0.0 {
                continue;
            }
            hits.push(SearchHit { record, score: total });

            if total > STRONG_MATCH_THRESHOLD {
                for suggestion in suggestions_for(record, &query) {
                    // First-seen wins; dedup is by exact string value
                    if seen_suggestions.insert(suggestion.text.clone()) {
                        suggestions.push(suggestion);
                    }
                }
            }
        }
    })
    .await;

    // Stable sort: equal scores keep input order, so repeated searches over
    // an unchanged catalog are reproducible
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(mode.result_cap());
    suggestions.truncate(mode.suggestion_cap());

    SearchOutcome {
        results: hits,
        suggestions,
    }
}

/// The fuzzy-skip performance guard.
///
/// Candidates at or above the weak floor always get the fuzzy signal - the
/// guard never changes the fate of a candidate the cheap signals already
/// qualified. Weak candidates get it only in exhaustive mode, and only while
/// the retained count is still below the result cap; past that point the
/// Levenshtein DP cannot improve the outcome enough to justify its cost on a
/// large catalog.
fn fuzzy_permitted(mode: SearchMode, cheap_score: f64, retained: usize) -> bool {
    if cheap_score >= WEAK_SCORE_FLOOR {
        return true;
    }
    mode == SearchMode::Exhaustive && retained < mode.result_cap()
}
