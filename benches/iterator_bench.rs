//! Benchmark for LazyIterator pipelines vs standard iterators.
//!
//! Compares the same map/filter/take/fold pipeline built from dogs' lazy
//! combinators against `std::iter`, plus container construction.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dogs::algebra::derive_additive_monoid;
use dogs::iterator::{self, LazyIterator, range};
use dogs::types::list::List;
use dogs::types::slice::Slice;
use std::hint::black_box;

// =============================================================================
// Pipeline Benchmark
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    for size in [100_u64, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("LazyIterator", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let pipeline = range(1, black_box(size))
                        .map(|x| x * 3)
                        .filter(|x| x % 2 == 0)
                        .take((size / 4) as usize);
                    black_box(iterator::sum(derive_additive_monoid::<u64>(), pipeline))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std::iter", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let total: u64 = (1..=black_box(size))
                        .map(|x| x * 3)
                        .filter(|x| x % 2 == 0)
                        .take((size / 4) as usize)
                        .sum();
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// flat_map Benchmark
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in [10_u32, 100, 300] {
        group.bench_with_input(
            BenchmarkId::new("LazyIterator", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let expanded = range(1, black_box(size)).flat_map(|n| range(1, n));
                    black_box(expanded.count())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std::iter", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box((1..=black_box(size)).flat_map(|n| 1..=n).count()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Collect Benchmark
// =============================================================================

fn benchmark_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect");

    for size in [100_i64, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(List::from_iterator(range(0, black_box(size)))));
        });

        group.bench_with_input(BenchmarkId::new("Slice", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(Slice::from_iterator(range(0, black_box(size)))));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| black_box((0..=black_box(size)).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline,
    benchmark_flat_map,
    benchmark_collect
);
criterion_main!(benches);
