// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! These types define what the engine searches over (`CatalogRecord`), how a
//! call is tuned (`SearchMode`), and what comes back (`SearchHit`,
//! `Suggestion`, `SearchOutcome`). Everything here is created fresh per search
//! call and discarded when the caller consumes the outcome - the engine holds
//! no state between calls.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **`SearchOutcome.results`**: non-increasing by score; candidates with
//!   equal score keep their input order, so repeated searches over an
//!   unchanged catalog are reproducible.
//! - **`SearchOutcome.suggestions`**: unique by exact string value within one
//!   call; never produced for a record at or below the strong-match threshold.
//! - **`CatalogRecord`**: read-only to the engine. Empty fields are legal and
//!   score as empty strings.

use serde::{Deserialize, Serialize};

/// Type-safe record identifier.
///
/// Opaque to the engine - it is carried through to results untouched so the
/// caller can map hits back to its own storage. The newtype prevents
/// accidentally passing a score or an index where an identifier is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

/// One searchable catalog entry: an identifier plus two text fields.
///
/// Fields are stored in display case; the engine lowercases per candidate at
/// scoring time and never mutates the record. Missing data is represented as
/// an empty string, which simply never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: RecordId,
    pub artist: String,
    pub title: String,
}

impl CatalogRecord {
    pub fn new(id: impl Into<RecordId>, artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// Execution mode: how much work a single search call is allowed to do.
///
/// Mode affects performance characteristics only - chunk cadence, result
/// caps, and whether the fuzzy signal is computed for weak candidates. It
/// never changes which exact-substring or word matches are found, and never
/// changes the scoring weights themselves.
///
/// `Reduced` is meant for rapid re-querying (search-as-you-type): smaller
/// chunks yield more often, smaller caps bound the sort, and the expensive
/// edit-distance signal is skipped for candidates that the cheap signals
/// already judged weak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Full scoring including the fuzzy edit-distance signal.
    #[default]
    Exhaustive,
    /// Skips the edit-distance signal for weak candidates; smaller caps.
    Reduced,
}

impl SearchMode {
    /// Candidates processed between cooperative yields.
    #[inline]
    pub const fn chunk_size(self) -> usize {
        match self {
            SearchMode::Exhaustive => 100,
            SearchMode::Reduced => 50,
        }
    }

    /// Maximum number of ranked results returned.
    #[inline]
    pub const fn result_cap(self) -> usize {
        match self {
            SearchMode::Exhaustive => 100,
            SearchMode::Reduced => 50,
        }
    }

    /// Maximum number of suggestions returned.
    #[inline]
    pub const fn suggestion_cap(self) -> usize {
        match self {
            SearchMode::Exhaustive => 5,
            SearchMode::Reduced => 3,
        }
    }
}

/// A ranked result: a catalog record reference plus its relevance score.
///
/// Scores are purely relative - there is no cap, and only the ordering they
/// induce is meaningful. The score rides along so callers (and tests) can
/// observe the ranking without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub record: &'a CatalogRecord,
    pub score: f64,
}

/// Coarse category of a "did you mean" suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionKind {
    /// The artist name alone.
    Artist,
    /// The title alone.
    Title,
    /// The combined "artist – title" string.
    Combined,
}

/// A display-ready completion string for a strong match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}

/// Everything one search call returns: ranked hits plus deduplicated
/// suggestions, both capped per mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome<'a> {
    pub results: Vec<SearchHit<'a>>,
    pub suggestions: Vec<Suggestion>,
}
