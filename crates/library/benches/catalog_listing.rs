//! Criterion benchmarks for catalog listing.
//!
//! Run: cargo bench -p library --features std --bench catalog_listing
//!
//!   list_artists/*     - LocalCatalog directory walk vs artist count
//!   from_entries_*     - filter + sort of a raw listing

#![allow(
    clippy::unwrap_used, // benchmark helpers use unwrap for brevity
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects,
    missing_docs, // criterion_group! macro generates undocumented items
)]

use std::fs;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use library::catalog::{Catalog, FileCatalog};
use library::LocalCatalog;
use tempfile::TempDir;

fn build_temp_library(artists: u32) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for n in 0..artists {
        fs::create_dir_all(tmp.path().join(format!("Artist {n:04}")).join("Album")).unwrap();
    }
    fs::create_dir_all(tmp.path().join(".Trashes")).unwrap();
    tmp
}

fn bench_list_artists(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_artists");
    for artists in [10u32, 100, 1_000] {
        let tmp = build_temp_library(artists);
        group.bench_with_input(BenchmarkId::new("artists", artists), &tmp, |b, tmp| {
            let mut catalog = LocalCatalog::new(tmp.path());
            b.iter(|| catalog.list_artists().unwrap());
        });
    }
    group.finish();
}

fn bench_from_entries(c: &mut Criterion) {
    // Reverse order so the sort does real work.
    let raw: Vec<String> = (0..2_000u32)
        .rev()
        .map(|n| {
            if n % 50 == 0 {
                format!("._{n:05}.mp3")
            } else {
                format!("{n:05}.mp3")
            }
        })
        .collect();
    c.bench_function("from_entries_2000", |b| {
        b.iter(|| Catalog::from_entries(raw.iter()));
    });
}

criterion_group!(benches, bench_list_artists, bench_from_entries);
criterion_main!(benches);
