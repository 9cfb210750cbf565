// ============================================================================
// Fraction Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - canonicalization cost across reduction depths
// 2. Arithmetic - checked operations on canonical operands
// 3. Codecs - text parse/format and the 8-byte binary record
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_fraction::prelude::*;

// ============================================================================
// Construction Benchmarks
// Reduction dominates; deeper common factors mean more Euclidean steps
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    // (numerator, denominator) pairs with increasing reduction work
    let cases = [
        ("coprime", (1_000_003, 999_983)),
        ("power_of_two", (1 << 20, 1 << 26)),
        ("fibonacci", (832_040, 1_346_269)), // worst case for Euclid
    ];

    for (label, (n, d)) in cases {
        group.bench_with_input(BenchmarkId::new("new", label), &(n, d), |b, &(n, d)| {
            b.iter(|| Fraction::new(black_box(n), black_box(d)).unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let x = Fraction::new(355, 113).unwrap();
    let y = Fraction::new(-217, 355).unwrap();

    group.bench_function("checked_add", |b| {
        b.iter(|| black_box(x).checked_add(black_box(y)).unwrap());
    });
    group.bench_function("checked_mul", |b| {
        b.iter(|| black_box(x).checked_mul(black_box(y)).unwrap());
    });
    group.bench_function("checked_div", |b| {
        b.iter(|| black_box(x).checked_div(black_box(y)).unwrap());
    });
    group.bench_function("checked_pow", |b| {
        b.iter(|| black_box(x).checked_pow(black_box(5)).unwrap());
    });
    group.bench_function("cmp", |b| {
        b.iter(|| black_box(x).cmp(&black_box(y)));
    });

    group.finish();
}

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn benchmark_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs");

    let x = Fraction::new(-123_456, 789_012).unwrap();
    let text = x.to_string();
    let record = x.encode();

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(x).to_string());
    });
    group.bench_function("parse", |b| {
        b.iter(|| text.parse::<Fraction>().unwrap());
    });
    group.bench_function("encode", |b| {
        b.iter(|| black_box(x).encode());
    });
    group.bench_function("decode", |b| {
        b.iter(|| Fraction::decode(black_box(&record)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_arithmetic,
    benchmark_codecs
);
criterion_main!(benches);
