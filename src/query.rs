// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization and tokenization.
//!
//! Both happen exactly once per search call and are reused across every
//! candidate - normalizing per candidate would dominate the scan cost on
//! large catalogs.

/// A user query, normalized once and shared across all candidates.
///
/// Normalization is deliberately minimal: lowercase plus trim. Records are
/// stored in display case and lowercased per candidate at scoring time, so
/// anything fancier here (diacritic stripping, whitespace collapsing) would
/// desynchronize the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    words: Vec<String>,
}

impl NormalizedQuery {
    /// Normalize raw user input: lowercase, trim, and split into words.
    ///
    /// Words are split on whitespace and ASCII punctuation, empty tokens
    /// dropped, order preserved. "ed sheeran's" tokenizes to
    /// `["ed", "sheeran", "s"]`.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let words = text
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect();
        Self { text, words }
    }

    /// An empty query matches nothing; the orchestrator returns early.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The lower-cased, trimmed query text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The query words, in input order.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
