// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cooperative chunked iteration.
//!
//! Scanning a large catalog on the interactive thread must not starve
//! whatever else that thread serves - in a UI that means keystrokes and
//! rendering. The scheduler processes candidates in contiguous chunks and
//! yields to the runtime between chunks, so pending tasks on the same
//! executor interleave at chunk boundaries.
//!
//! Those yields are the only suspension points in a search: everything else
//! is pure computation. They are also the cancellation points - a caller
//! abandons a search by dropping the future, and there is nothing to tear
//! down because the engine holds no external resources.

/// Run `body` over contiguous chunks of `items`, yielding between chunks.
///
/// The last chunk may be shorter. A `chunk_size` of zero is treated as one.
/// No yield happens after the final chunk - control returns to the caller
/// directly. Items are visited exactly once, in input order, regardless of
/// chunk boundaries.
pub async fn for_each_chunk<'a, T, F>(items: &'a [T], chunk_size: usize, mut body: F)
where
    F: FnMut(&'a [T]),
{
    let mut chunks = items.chunks(chunk_size.max(1)).peekable();
    while let Some(chunk) = chunks.next() {
        body(chunk);
        if chunks.peek().is_some() {
            tokio::task::yield_now().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_visits_every_item_in_order() {
        let items: Vec<usize> = (0..25).collect();
        let mut seen = Vec::new();
        for_each_chunk(&items, 4, |chunk| seen.extend_from_slice(chunk)).await;
        assert_eq!(seen, items);
    }

    #[tokio::test]
    async fn test_chunk_boundaries() {
        let items: Vec<usize> = (0..10).collect();
        let mut sizes = Vec::new();
        for_each_chunk(&items, 4, |chunk| sizes.push(chunk.len())).await;
        assert_eq!(sizes, [4, 4, 2]);
    }

    #[tokio::test]
    async fn test_empty_input_runs_no_body() {
        let items: Vec<usize> = Vec::new();
        let mut calls = 0;
        for_each_chunk(&items, 4, |_| calls += 1).await;
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_zero_chunk_size_treated_as_one() {
        let items = [1, 2, 3];
        let mut sizes = Vec::new();
        for_each_chunk(&items, 0, |chunk| sizes.push(chunk.len())).await;
        assert_eq!(sizes, [1, 1, 1]);
    }

    #[tokio::test]
    async fn test_interleaves_with_other_tasks() {
        // A concurrent task must get scheduled between chunks on the same
        // single-threaded runtime.
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let ticks = Arc::new(AtomicUsize::new(0));
        let background = {
            let ticks = Arc::clone(&ticks);
            tokio::task::spawn(async move {
                loop {
                    ticks.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                }
            })
        };

        let items: Vec<usize> = (0..100).collect();
        for_each_chunk(&items, 10, |_| {}).await;

        background.abort();
        assert!(ticks.load(Ordering::SeqCst) > 0);
    }
}
