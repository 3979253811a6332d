// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory fuzzy search and ranking for artist/title catalogs.
//!
//! Point the engine at a snapshot of catalog records and a short, possibly
//! misspelled query; get back ranked results and "did you mean" suggestions.
//! No index structures, no I/O, no persistent state - one pass over the
//! snapshot per call, chunked so a large catalog scan never monopolizes the
//! thread it shares with interactive work.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  query.rs   │────▶│  scoring.rs  │────▶│  search.rs  │
//! │ (normalize, │     │ (weights,    │     │ (orchestra- │
//! │  tokenize)  │     │  signals)    │     │  tor)       │
//! └─────────────┘     └──────┬───────┘     └──────┬──────┘
//!                            │                    │
//!                     ┌──────▼───────┐     ┌──────▼──────┐
//!                     │levenshtein.rs│     │  batch.rs   │
//!                     │ (edit dist.) │     │ (chunking + │
//!                     │              │     │  yielding)  │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! `suggest.rs` hangs off the orchestrator for strong matches; `types.rs`
//! defines the records, modes, and outcome types shared by everything.
//!
//! # Usage
//!
//! ```
//! use melodex::{search, CatalogRecord, SearchMode};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let catalog = vec![
//!     CatalogRecord::new(0u64, "Ed Sheeran", "Shape of You"),
//!     CatalogRecord::new(1u64, "Adele", "Hello"),
//! ];
//!
//! let outcome = search("ed sheer", &catalog, SearchMode::Exhaustive).await;
//! assert_eq!(outcome.results[0].record.artist, "Ed Sheeran");
//! # });
//! ```
//!
//! # Execution model
//!
//! The whole search runs on one logical task; the only suspension points are
//! the cooperative yields between scoring chunks. Cancel by dropping the
//! future. Concurrent calls over the same snapshot are safe - all per-call
//! state lives on the call's own stack.

mod batch;
mod levenshtein;
mod query;
mod scoring;
mod search;
mod suggest;
mod types;

// Re-exports for public API
pub use batch::for_each_chunk;
pub use levenshtein::levenshtein;
pub use query::NormalizedQuery;
pub use scoring::{
    cheap_score, fuzzy_score, score, ACRONYM_SCORE, EXACT_SUBSTRING_SCORE, FULL_PREFIX_BONUS,
    FUZZY_INPUT_MAX_CHARS, FUZZY_MAX_SCORE, FUZZY_MIN_SIMILARITY, STRONG_MATCH_THRESHOLD,
    WEAK_SCORE_FLOOR, WORD_MATCH_SCORE, WORD_PREFIX_BONUS,
};
pub use search::search;
pub use suggest::suggestions_for;
pub use types::{
    CatalogRecord, RecordId, SearchHit, SearchMode, SearchOutcome, Suggestion, SuggestionKind,
};
