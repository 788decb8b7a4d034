#![allow(missing_docs, reason = "Unnecessary for benchmarks")]
#![allow(unused_results, reason = "Unnecessary for benchmarks")]
#![allow(clippy::missing_assert_message, reason = "Unnecessary for benchmarks")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use newton_core::{iterate_many, newton_sequence};
use pprof::criterion::{Output, PProfProfiler};
use std::hint::black_box;

fn cubic(x: f64) -> f64 {
    x.powi(3) - 100.0
}

fn cubic_der(x: f64) -> f64 {
    3.0 * x.powi(2)
}

#[allow(clippy::missing_panics_doc, reason = "Benchmarking only")]
pub fn sequence_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequence");
    for max_steps in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("cubic", max_steps),
            &max_steps,
            |b, &max_steps| {
                b.iter(|| {
                    assert!(newton_sequence(cubic, cubic_der, black_box(-6.0), max_steps).is_ok());
                });
            },
        );
    }
}

#[allow(clippy::missing_panics_doc, reason = "Benchmarking only")]
pub fn batch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    let starts: Vec<f64> = (1..=10_000).map(|v| f64::from(v) * 1e-2).collect();
    group.bench_function("cubic", |b| {
        b.iter(|| iterate_many(cubic, cubic_der, black_box(&starts), 20));
    });
}

criterion_group!(name=newton;
                config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                targets=sequence_benchmark, batch_benchmark);
criterion_main!(newton);
