// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean" suggestion generation.
//!
//! Only strong matches get suggestions - the orchestrator enforces the score
//! threshold before calling in here, so this module just turns one qualifying
//! record into display strings. Cross-candidate deduplication is also the
//! orchestrator's job; within a single record the rules below already avoid
//! emitting the raw query back at the user.

use crate::query::NormalizedQuery;
use crate::types::{CatalogRecord, Suggestion, SuggestionKind};

/// Completion strings for one strong-match record.
///
/// Emits up to three suggestions:
/// - the artist name, if it contains the query and is not identical to it
/// - the title, under the same rule
/// - "artist – title", if either field contains the query
///
/// Suggestions carry the record's display case, not the normalized form.
pub fn suggestions_for(record: &CatalogRecord, query: &NormalizedQuery) -> Vec<Suggestion> {
    let text = query.text();
    let artist = record.artist.to_lowercase();
    let title = record.title.to_lowercase();

    let artist_hit = !artist.is_empty() && artist.contains(text);
    let title_hit = !title.is_empty() && title.contains(text);

    let mut suggestions = Vec::with_capacity(3);

    if artist_hit && artist != text {
        suggestions.push(Suggestion {
            text: record.artist.clone(),
            kind: SuggestionKind::Artist,
        });
    }

    if title_hit && title != text {
        suggestions.push(Suggestion {
            text: record.title.clone(),
            kind: SuggestionKind::Title,
        });
    }

    if artist_hit || title_hit {
        suggestions.push(Suggestion {
            text: format!("{} – {}", record.artist, record.title),
            kind: SuggestionKind::Combined,
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(artist: &str, title: &str) -> CatalogRecord {
        CatalogRecord::new(0u64, artist, title)
    }

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_artist_title_and_combined() {
        let rec = record("Ed Sheeran", "Shape of You");
        let out = suggestions_for(&rec, &NormalizedQuery::parse("sh"));
        assert_eq!(
            texts(&out),
            ["Ed Sheeran", "Shape of You", "Ed Sheeran – Shape of You"]
        );
        assert_eq!(out[0].kind, SuggestionKind::Artist);
        assert_eq!(out[1].kind, SuggestionKind::Title);
        assert_eq!(out[2].kind, SuggestionKind::Combined);
    }

    #[test]
    fn test_identical_field_is_suppressed() {
        let rec = record("Adele", "Hello");
        // Query equals the artist: no point suggesting what was typed
        let out = suggestions_for(&rec, &NormalizedQuery::parse("adele"));
        assert_eq!(texts(&out), ["Adele – Hello"]);
    }

    #[test]
    fn test_only_matching_fields_suggested() {
        let rec = record("Adele", "Hello");
        let out = suggestions_for(&rec, &NormalizedQuery::parse("hel"));
        assert_eq!(texts(&out), ["Hello", "Adele – Hello"]);
    }

    #[test]
    fn test_no_containment_no_suggestions() {
        let rec = record("Adele", "Hello");
        assert!(suggestions_for(&rec, &NormalizedQuery::parse("xyz")).is_empty());
    }

    #[test]
    fn test_empty_artist_not_suggested_alone() {
        let rec = record("", "Hello");
        let out = suggestions_for(&rec, &NormalizedQuery::parse("hel"));
        assert_eq!(texts(&out), ["Hello", " – Hello"]);
    }

    #[test]
    fn test_display_case_preserved() {
        let rec = record("AC/DC", "Thunderstruck");
        let out = suggestions_for(&rec, &NormalizedQuery::parse("ac/d"));
        assert_eq!(out[0].text, "AC/DC");
    }
}
