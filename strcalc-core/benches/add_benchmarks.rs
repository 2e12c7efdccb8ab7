//! Performance benchmarks for the calculator
//!
//! Run with: cargo bench --bench add_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use strcalc_core::Calculator;

/// Generate a body of `count` numbers joined by `separator`
fn generate_body(count: usize, separator: &str) -> String {
    (0..count)
        .map(|i| (i % 1000).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Benchmark default-mode scanning at different input sizes
fn bench_default_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_mode");
    let calculator = Calculator::new();

    for count in [100, 10_000, 100_000] {
        let input = generate_body(count, ",");

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("add", count), &input, |b, input| {
            b.iter(|| calculator.add(black_box(input)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark custom delimiter declarations
fn bench_custom_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom_delimiters");
    let calculator = Calculator::new();

    let cases = [
        ("single", format!("//;\n{}", generate_body(10_000, ";"))),
        ("bracketed", format!("//[***]\n{}", generate_body(10_000, "***"))),
        (
            "multiple",
            format!("//[***][###]\n{}", generate_body(10_000, "###")),
        ),
    ];

    for (name, input) in &cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("add", name), input, |b, input| {
            b.iter(|| calculator.add(black_box(input)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_default_mode, bench_custom_delimiters);
criterion_main!(benches);
