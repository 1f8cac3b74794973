//! Benchmark for List against the standard Vec / VecDeque.
//!
//! Covers construction, traversal, and the buffer-backed transformations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use persistent_adt::function::{mapper, predicate};
use persistent_adt::list;
use persistent_adt::persistent::List;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// prepended Benchmark
// =============================================================================

fn benchmark_prepended(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prepended");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = List::new();
                for index in 0..size {
                    list = list.prepended(black_box(index));
                }
                black_box(list)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// appended_all / reverse Benchmark
// =============================================================================

fn benchmark_appended_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("appended_all");

    for size in [100, 1000, 10000] {
        let left: List<i32> = (0..size).collect();
        let right: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.appended_all(right.iter().copied())));
        });

        let left_vec: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut combined = left_vec.clone();
                combined.extend_from_slice(&right);
                black_box(combined)
            });
        });
    }

    group.finish();
}

fn benchmark_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reverse");

    for size in [100, 1000, 10000] {
        let list: List<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.reverse()));
        });
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let list: List<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("map", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.map(|x| x * 2)));
        });

        group.bench_with_input(BenchmarkId::new("filter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.filter(|x| x % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("find_last", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.find_last(|x| x % 7 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("get_last", size), &size, |bencher, &size| {
            let last = usize::try_from(size - 1).unwrap_or_default();
            bencher.iter(|| black_box(list.get(black_box(last))));
        });
    }

    group.finish();
}

// =============================================================================
// collect Benchmark
// =============================================================================

fn benchmark_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect");

    let predicates = list![
        predicate(|x: &i32| x % 2 == 0),
        predicate(|x: &i32| x % 3 == 0),
        predicate(|x: &i32| x % 5 == 0)
    ];
    let mappers = list![
        mapper(|x: &i32| x * 10),
        mapper(|x: &i32| x * 100),
        mapper(|x: &i32| x * 1000)
    ];

    for size in [100, 1000, 10000] {
        let list: List<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.collect(&predicates, &mappers)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_prepended,
    benchmark_appended_all,
    benchmark_reverse,
    benchmark_traversal,
    benchmark_collect
);
criterion_main!(benches);
