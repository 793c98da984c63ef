//! Benchmark for Stream pipelines over OrderedMap.
//!
//! Measures the fluent pipeline operations against hand-rolled loops over
//! a plain Vec of pairs, for common collection sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use streamap::collection::OrderedMap;
use streamap::stream::{Stream, collectors};

fn sample_map(size: usize) -> OrderedMap<usize, usize> {
    (0..size).map(|index| (index, index * 3)).collect()
}

// =============================================================================
// filter + map pipeline Benchmark
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map_pipeline");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("Stream", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || sample_map(size),
                |map| {
                    let result = Stream::of(map)
                        .filter(|value, _| value % 2 == 0)
                        .map(|value, _| value + 1)
                        .collect(collectors::to_array());
                    black_box(result)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || (0..size).map(|index| (index, index * 3)).collect::<Vec<_>>(),
                |pairs| {
                    let result: Vec<(usize, usize)> = pairs
                        .into_iter()
                        .filter(|(_, value)| value % 2 == 0)
                        .map(|(key, value)| (key, value + 1))
                        .collect();
                    black_box(result)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// map_keys Benchmark
// =============================================================================

fn benchmark_map_keys(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_keys");

    for size in [16, 256] {
        group.bench_with_input(BenchmarkId::new("Stream", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || sample_map(size),
                |map| {
                    let result = Stream::of(map)
                        .map_keys(|_, key| key % 32)
                        .collect(collectors::to_array());
                    black_box(result)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipeline, benchmark_map_keys);
criterion_main!(benches);
