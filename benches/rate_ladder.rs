// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for rate ladder derivation.
//!
//! Measures the performance of:
//! - Building the ladder from a single rate
//! - Rendering ladder rows as display text

use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use skyventor::domain::rates::build_ladder;
use std::hint::black_box;

const MULTIPLIERS: [u32; 4] = [1, 10, 100, 1000];

/// Benchmark ladder construction for a fiat-like and a crypto-like rate.
fn bench_build_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_ladder");

    let fiat_rate = Decimal::new(90_1234, 4);
    let crypto_rate = Decimal::new(15, 6);

    group.bench_function("build_fiat", |b| {
        b.iter(|| black_box(build_ladder(black_box(fiat_rate), &MULTIPLIERS)));
    });

    group.bench_function("build_crypto", |b| {
        b.iter(|| black_box(build_ladder(black_box(crypto_rate), &MULTIPLIERS)));
    });

    group.finish();
}

/// Benchmark formatting of every row, as the rates table does per frame.
fn bench_format_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_ladder");

    let rows = build_ladder(Decimal::new(90_1234, 4), &MULTIPLIERS);

    group.bench_function("format_rows", |b| {
        b.iter(|| {
            for row in &rows {
                black_box(row.multiplier_text());
                black_box(row.source_text());
                black_box(row.target_text());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build_ladder, bench_format_rows);
criterion_main!(benches);
