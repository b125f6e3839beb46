//! Suffix index benchmarks
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sufidx::index::suffix_array::{IndexConfig, SuffixIndex};

/// Deterministic pseudo-prose of roughly `len` bytes
fn sample_text(len: usize) -> String {
    const WORDS: &[&str] = &[
        "suffix", "index", "search", "prefix", "common", "substring", "sorted", "binary",
        "text", "match", "range", "cursor",
    ];
    let mut text = String::with_capacity(len + 16);
    let mut state: u32 = 0x9e37_79b9;
    while text.len() < len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        text.push_str(WORDS[state as usize % WORDS.len()]);
        text.push(' ');
    }
    text.truncate(len);
    text
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &text, |b, text| {
            let config = IndexConfig {
                parallel_sort_threshold: usize::MAX,
                ..Default::default()
            };
            b.iter(|| SuffixIndex::with_config(black_box(text.as_str()), config.clone()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &text, |b, text| {
            let config = IndexConfig {
                parallel_sort_threshold: 0,
                ..Default::default()
            };
            b.iter(|| SuffixIndex::with_config(black_box(text.as_str()), config.clone()))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = SuffixIndex::from(sample_text(100_000));

    let mut group = c.benchmark_group("search");
    for pattern in ["s", "suffix", "substring sorted", "absent pattern"] {
        group.bench_with_input(BenchmarkId::from_parameter(pattern), &pattern, |b, &p| {
            b.iter(|| index.search(black_box(p)).count())
        });
    }
    group.finish();
}

fn bench_lcs(c: &mut Criterion) {
    let longer = SuffixIndex::from(sample_text(20_000));
    let shorter = SuffixIndex::from("xx binary text match range yy");

    c.bench_function("lcs/short_vs_20k", |b| {
        b.iter(|| black_box(&longer) & black_box(&shorter))
    });
}

criterion_group!(benches, bench_build, bench_search, bench_lcs);
criterion_main!(benches);
