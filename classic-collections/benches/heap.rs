//! Benchmarks for MinHeap.
//!
//! Compares against std's BinaryHeap wrapped in `Reverse`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use classic_collections::MinHeap;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_values(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.r#gen()).collect()
}

// ============================================================================
// Steady-state push+pop at a fixed depth
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_push_pop");

    for depth in [16usize, 1024, 65536] {
        let values = random_values(depth);

        group.bench_with_input(BenchmarkId::new("min_heap", depth), &values, |b, values| {
            let mut heap = MinHeap::from(values.clone());
            let mut next = 0u64;
            b.iter(|| {
                next = next.wrapping_add(0x9e37_79b9_7f4a_7c15);
                heap.push(black_box(next));
                black_box(heap.pop())
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", depth), &values, |b, values| {
            let mut heap: BinaryHeap<Reverse<u64>> = values.iter().copied().map(Reverse).collect();
            let mut next = 0u64;
            b.iter(|| {
                next = next.wrapping_add(0x9e37_79b9_7f4a_7c15);
                heap.push(black_box(Reverse(next)));
                black_box(heap.pop())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Bulk construction and drain
// ============================================================================

fn bench_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_heapify");

    for n in [1024usize, 65536] {
        let values = random_values(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("min_heap", n), &values, |b, values| {
            b.iter(|| black_box(MinHeap::from(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &values, |b, values| {
            b.iter(|| {
                black_box(
                    values
                        .iter()
                        .copied()
                        .map(Reverse)
                        .collect::<BinaryHeap<_>>(),
                )
            });
        });
    }

    group.finish();
}

fn bench_sorted_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sorted_drain");

    let n = 4096usize;
    let values = random_values(n);
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("min_heap/into_sorted_vec", |b| {
        b.iter(|| black_box(MinHeap::from(values.clone()).into_sorted_vec()));
    });

    group.bench_function("min_heap/pop_loop", |b| {
        b.iter(|| {
            let mut heap = MinHeap::from(values.clone());
            while let Some(v) = heap.pop() {
                black_box(v);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Removal by value
// ============================================================================

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_remove");

    for depth in [64usize, 1024] {
        let values = random_values(depth);

        // Remove then reinsert the same value so the heap size stays fixed
        group.bench_with_input(BenchmarkId::new("min_heap", depth), &values, |b, values| {
            let mut heap = MinHeap::from(values.clone());
            let mut i = 0usize;
            b.iter(|| {
                let target = values[i % values.len()];
                i += 1;
                black_box(heap.remove(&target));
                heap.push(target);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_heapify,
    bench_sorted_drain,
    bench_remove
);
criterion_main!(benches);
