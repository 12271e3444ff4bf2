//! Benchmarks for JSON scalar parsing.
//!
//! Run with: cargo bench -p parsecomb-json

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use parsecomb_core::{ParseInput, Parser};
use parsecomb_json::json_value;

/// Benchmark each value kind, pre-split into characters.
fn bench_values(c: &mut Criterion) {
    let cases = [
        ("string", "\"the quick brown fox jumps over the lazy dog\""),
        ("integer", "-9223372036854775808"),
        ("keyword", "false"),
    ];

    let parser = json_value();
    let mut group = c.benchmark_group("json_value");
    for (name, text) in cases {
        let input: Vec<char> = text.chars().collect();
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| parser.parse(ParseInput::new(black_box(&input))).is_ok())
        });
    }
    group.finish();
}

/// Benchmark the cost of the string branch failing on a long unterminated
/// string before the later alternatives run.
fn bench_unterminated(c: &mut Criterion) {
    let text = format!("\"{}", "x".repeat(4096));
    let input: Vec<char> = text.chars().collect();

    let parser = json_value();
    let mut group = c.benchmark_group("json_value_failure");
    group.throughput(Throughput::Elements(input.len() as u64));
    group.bench_function("unterminated_4k", |b| {
        b.iter(|| parser.parse(ParseInput::new(black_box(&input))).is_err())
    });
    group.finish();
}

criterion_group!(benches, bench_values, bench_unterminated);
criterion_main!(benches);
