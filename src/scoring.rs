// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Five additive signals, cheapest first: exact substring, per-word
//! containment, prefix bonuses, acronym match, and fuzzy proximity. The first
//! four are plain string scans; only fuzzy proximity pays for a Levenshtein
//! DP, which is why the orchestrator may skip it for weak candidates on large
//! catalogs (see `search::fuzzy_permitted`).
//!
//! Weights are fixed constants from empirical tuning, deliberately far apart
//! so the signal hierarchy is stable: a full substring match (100) always
//! outranks any pile of bonuses a non-substring candidate can accumulate from
//! prefix (25 + 15/word) and acronym (20) signals alone.
//!
//! # Constants
//!
//! | Constant | Value | Why this value |
//! |----------|-------|----------------|
//! | `EXACT_SUBSTRING_SCORE`  | 100.0 | Dominates everything; a literal hit is what the user typed |
//! | `WORD_MATCH_SCORE`       | 50.0  | Per word, per field - multi-word hits stack up fast |
//! | `FULL_PREFIX_BONUS`      | 25.0  | Prefix typing is the common search-as-you-type case |
//! | `WORD_PREFIX_BONUS`      | 15.0  | Weaker per-word variant of the same idea |
//! | `FUZZY_MAX_SCORE`        | 30.0  | A perfect fuzzy match ranks above a lone word-prefix, below a word hit |
//! | `ACRONYM_SCORE`          | 20.0  | Enough to surface "aj" → "Alan Jackson", not enough to beat real text hits |
//!
//! The same constants apply in both execution modes; mode only decides which
//! signals get computed, never their weights.

use crate::levenshtein::{levenshtein, truncate_chars};
use crate::query::NormalizedQuery;
use crate::types::CatalogRecord;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Query is a literal substring of the lower-cased artist or title.
pub const EXACT_SUBSTRING_SCORE: f64 = 100.0;

/// Per query word found as a substring, counted independently per field.
pub const WORD_MATCH_SCORE: f64 = 50.0;

/// Either field starts with the full query.
pub const FULL_PREFIX_BONUS: f64 = 25.0;

/// Per query word that is itself a prefix of either field.
pub const WORD_PREFIX_BONUS: f64 = 15.0;

/// Ceiling of the fuzzy-proximity signal (scaled by similarity).
pub const FUZZY_MAX_SCORE: f64 = 30.0;

/// First letters of a field's words form a string starting with the query.
pub const ACRONYM_SCORE: f64 = 20.0;

/// Candidates scoring above this feed the suggestion generator.
pub const STRONG_MATCH_THRESHOLD: f64 = 60.0;

/// Below this cheap-signal score a candidate counts as weak for the
/// fuzzy-skip performance guard.
pub const WEAK_SCORE_FLOOR: f64 = 25.0;

/// Fuzzy similarity below this contributes nothing. Without a floor, every
/// record accrues residual fuzzy score against every query ("hello" vs
/// "ed sheer" is still ~12% similar) and nothing ever scores zero.
pub const FUZZY_MIN_SIMILARITY: f64 = 0.6;

/// Inputs to the Levenshtein DP are truncated to this many characters,
/// bounding the table regardless of catalog contents.
pub const FUZZY_INPUT_MAX_CHARS: usize = 64;

/// Full relevance score: cheap signals plus fuzzy proximity.
///
/// Non-negative; zero means "not a match, discard". There is no cap - scores
/// are purely relative for sorting.
pub fn score(record: &CatalogRecord, query: &NormalizedQuery) -> f64 {
    cheap_score(record, query) + fuzzy_score(record, query)
}

/// The four cheap signals: exact substring, word containment, prefixes,
/// acronym. Plain string scans, no DP.
pub fn cheap_score(record: &CatalogRecord, query: &NormalizedQuery) -> f64 {
    let artist = record.artist.to_lowercase();
    let title = record.title.to_lowercase();
    let text = query.text();

    let mut total = 0.0;

    if artist.contains(text) || title.contains(text) {
        total += EXACT_SUBSTRING_SCORE;
    }

    for word in query.words() {
        let word = word.as_str();
        if artist.contains(word) {
            total += WORD_MATCH_SCORE;
        }
        if title.contains(word) {
            total += WORD_MATCH_SCORE;
        }
        if artist.starts_with(word) || title.starts_with(word) {
            total += WORD_PREFIX_BONUS;
        }
    }

    if artist.starts_with(text) || title.starts_with(text) {
        total += FULL_PREFIX_BONUS;
    }

    if acronym_starts_with(&artist, text) || acronym_starts_with(&title, text) {
        total += ACRONYM_SCORE;
    }

    total
}

/// Fuzzy proximity: edit distance normalized against the longer string,
/// evaluated against artist, title, and "artist title", keeping the best.
///
/// Similarity below `FUZZY_MIN_SIMILARITY` is discarded, so unrelated
/// strings contribute exactly zero. Inputs are length-capped before the DP.
pub fn fuzzy_score(record: &CatalogRecord, query: &NormalizedQuery) -> f64 {
    let text = truncate_chars(query.text(), FUZZY_INPUT_MAX_CHARS);
    if text.is_empty() {
        return 0.0;
    }

    let artist = record.artist.to_lowercase();
    let title = record.title.to_lowercase();
    let combined = format!("{artist} {title}");

    let best = [artist.as_str(), title.as_str(), combined.as_str()]
        .into_iter()
        .map(|field| similarity(text, field))
        .fold(0.0, f64::max);

    best * FUZZY_MAX_SCORE
}

/// Normalized similarity in `[0, 1]`, zeroed below the contribution floor.
fn similarity(query: &str, field: &str) -> f64 {
    let field = truncate_chars(field, FUZZY_INPUT_MAX_CHARS);
    let max_len = query.chars().count().max(field.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    // Distance never exceeds the longer length at unit costs
    let distance = levenshtein(query, field);
    let similarity = (max_len - distance) as f64 / max_len as f64;

    if similarity >= FUZZY_MIN_SIMILARITY {
        similarity
    } else {
        0.0
    }
}

/// Does the first-letters string of `field`'s words start with `query`?
///
/// "alan jackson" → "aj", so query "aj" (or "a") matches. Field must already
/// be lower-cased by the caller.
fn acronym_starts_with(field: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let acronym: String = field
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|word| !word.is_empty())
        .filter_map(|word| word.chars().next())
        .collect();
    !acronym.is_empty() && acronym.starts_with(query)
}
