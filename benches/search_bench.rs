// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks over realistic catalog sizes.
//!
//! Simulates the catalogs the engine is built for:
//! - small:  ~500 entries   (personal library)
//! - medium: ~5000 entries  (venue catalog)
//! - large:  ~50000 entries (full licensing catalog)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use melodex::{levenshtein, search, CatalogRecord, SearchMode};

const CATALOG_SIZES: &[(&str, usize)] = &[("small", 500), ("medium", 5_000), ("large", 50_000)];

const ARTISTS: &[&str] = &[
    "Ed Sheeran",
    "Adele",
    "Queen",
    "Alan Jackson",
    "Johnny Cash",
    "Dolly Parton",
    "Elton John",
    "Fleetwood Mac",
    "Stevie Wonder",
    "Aretha Franklin",
];

const TITLES: &[&str] = &[
    "Shape of You",
    "Hello",
    "Bohemian Rhapsody",
    "Chattahoochee",
    "Ring of Fire",
    "Jolene",
    "Rocket Man",
    "Dreams",
    "Superstition",
    "Respect",
];

/// Queries spanning the signal spectrum: exact, prefix, typo, acronym, miss.
const QUERIES: &[&str] = &["adele", "boh", "bohemian rapsody", "aj", "zzzz"];

fn build_catalog(size: usize) -> Vec<CatalogRecord> {
    (0..size as u64)
        .map(|i| {
            CatalogRecord::new(
                i,
                ARTISTS[i as usize % ARTISTS.len()],
                TITLES[(i as usize / ARTISTS.len()) % TITLES.len()],
            )
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    let mut group = c.benchmark_group("search");
    for &(name, size) in CATALOG_SIZES {
        let catalog = build_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        for mode in [SearchMode::Exhaustive, SearchMode::Reduced] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), name),
                &catalog,
                |b, catalog| {
                    b.iter(|| {
                        for query in QUERIES {
                            let outcome =
                                runtime.block_on(search(black_box(query), catalog, mode));
                            black_box(outcome);
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");
    let pairs = [
        ("short", ("helo", "hello")),
        ("title", ("bohemian rapsody", "bohemian rhapsody")),
        (
            "combined",
            ("ed sheeran shape of you", "ed sheeran perfect duet"),
        ),
    ];
    for (name, (a, b)) in pairs {
        group.bench_function(name, |bench| {
            bench.iter(|| levenshtein(black_box(a), black_box(b)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_levenshtein);
criterion_main!(benches);
