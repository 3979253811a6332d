// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! Standard single-row dynamic-programming Levenshtein: insertions,
//! deletions, and substitutions at unit cost, no transpositions. O(|a|·|b|)
//! time, O(|b|) space. Character counts, not byte lengths - the distinction
//! matters for any non-ASCII title.
//!
//! The fuzzy-proximity signal truncates its inputs to a fixed character cap
//! before calling in here (see `scoring::FUZZY_INPUT_MAX_CHARS`), so the DP
//! row stays small no matter what the catalog contains.

/// Minimum number of single-character edits to turn `a` into `b`.
///
/// Pure and deterministic. Empty strings cost the other string's length;
/// identical strings cost zero; with unit costs the result is symmetric.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    // dp[j] holds the distance between the first i chars of `a` and the
    // first j chars of `b`, rolled one row at a time.
    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Truncate to at most `max` characters, on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
