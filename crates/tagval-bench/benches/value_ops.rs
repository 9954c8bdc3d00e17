//! Criterion micro-benchmarks for value construction and formatting.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tagval_bench::{mixed_variants, populated_registry};
use tagval_core::{DefaultFormatter, FormatConfig, IndexCounter, TaggedValue, Variant};
use tagval_test_utils::ConstFormatter;

/// Benchmark: construct and release one value of each kind.
fn bench_create_release(c: &mut Criterion) {
    let counter = IndexCounter::new();
    let payloads = mixed_variants(3);

    c.bench_function("create_release_3_kinds", |b| {
        b.iter(|| {
            for (variant, name) in &payloads {
                let v = TaggedValue::new_in(&counter, variant.clone(), name);
                black_box(v.index());
                v.release();
            }
        });
    });
}

/// Benchmark: format through the shared default formatter.
fn bench_format_default(c: &mut Criterion) {
    let v = TaggedValue::create_float(0.5, "tag1");

    c.bench_function("format_default_float", |b| {
        b.iter(|| black_box(v.format()));
    });
}

/// Benchmark: format with a custom precision and label.
fn bench_format_configured(c: &mut Criterion) {
    let config = FormatConfig {
        float_precision: 12,
        record_label: "Sample".to_string(),
    };
    let formatter = DefaultFormatter::with_config(config).unwrap();
    let v = TaggedValue::create_float(std::f64::consts::PI, "pi").with_formatter(formatter);

    c.bench_function("format_configured_float", |b| {
        b.iter(|| black_box(v.format()));
    });
}

/// Benchmark: dispatch through a trivial custom formatter, isolating the
/// per-instance hook cost from text rendering.
fn bench_format_hook_dispatch(c: &mut Criterion) {
    let v = TaggedValue::create_unsigned(5, "tag0").with_formatter(ConstFormatter::new("x"));

    c.bench_function("format_hook_dispatch", |b| {
        b.iter(|| black_box(v.format()));
    });
}

/// Benchmark: format every value in a 1K registry.
fn bench_registry_format_all(c: &mut Criterion) {
    let registry = populated_registry(1_000);

    c.bench_function("registry_format_all_1k", |b| {
        b.iter(|| black_box(registry.format_all()));
    });
}

/// Benchmark: text construction copies the payload.
fn bench_create_text_4k(c: &mut Criterion) {
    let counter = IndexCounter::new();
    let payload = "x".repeat(4096);

    c.bench_function("create_text_4k", |b| {
        b.iter(|| {
            let v = TaggedValue::new_in(&counter, Variant::Text(payload.clone()), "big");
            black_box(v.as_text().map(str::len));
        });
    });
}

criterion_group!(
    benches,
    bench_create_release,
    bench_format_default,
    bench_format_configured,
    bench_format_hook_dispatch,
    bench_registry_format_all,
    bench_create_text_4k,
);
criterion_main!(benches);
