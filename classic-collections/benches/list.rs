//! Benchmarks for LinkedList and the adapters built on it.
//!
//! Compares against std's LinkedList and VecDeque.

use std::collections::{LinkedList as StdList, VecDeque};

use classic_collections::{CircularBuffer, LinkedList, Queue, Stack};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

// ============================================================================
// Single-operation latency at the ends
// ============================================================================

fn bench_end_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_end_ops");

    group.bench_function("linked_list/push_back+pop_front", |b| {
        let mut list = LinkedList::with_capacity(1024);
        list.extend_back(0..512u64);
        b.iter(|| {
            list.push_back(black_box(42u64));
            black_box(list.pop_front())
        });
    });

    group.bench_function("std_linked_list/push_back+pop_front", |b| {
        let mut list: StdList<u64> = (0..512u64).collect();
        b.iter(|| {
            list.push_back(black_box(42u64));
            black_box(list.pop_front())
        });
    });

    group.bench_function("vec_deque/push_back+pop_front", |b| {
        let mut deque: VecDeque<u64> = (0..512u64).collect();
        b.iter(|| {
            deque.push_back(black_box(42u64));
            black_box(deque.pop_front())
        });
    });

    group.finish();
}

// ============================================================================
// Indexed access
// ============================================================================

fn bench_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_indexed");

    for len in [64usize, 1024] {
        let list: LinkedList<u64> = (0..len as u64).collect();
        let mid = len / 2;

        group.bench_with_input(BenchmarkId::new("get/middle", len), &list, |b, list| {
            b.iter(|| black_box(list.get(black_box(mid))));
        });

        group.bench_with_input(BenchmarkId::new("get/near_tail", len), &list, |b, list| {
            b.iter(|| black_box(list.get(black_box(len - 2))));
        });

        group.bench_with_input(BenchmarkId::new("insert+remove/middle", len), &list, |b, list| {
            let mut list = list.clone();
            b.iter(|| {
                list.insert(mid, black_box(7)).ok();
                black_box(list.remove(mid))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Adapters
// ============================================================================

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    group.throughput(Throughput::Elements(1));

    group.bench_function("queue/enqueue+dequeue", |b| {
        let mut queue = Queue::with_capacity(64);
        b.iter(|| {
            queue.enqueue(black_box(1u64));
            black_box(queue.dequeue())
        });
    });

    group.bench_function("stack/push+pop", |b| {
        let mut stack = Stack::with_capacity(64);
        b.iter(|| {
            stack.push(black_box(1u64));
            black_box(stack.pop())
        });
    });

    // Always full: every enqueue overwrites
    group.bench_function("circular_buffer/enqueue_full", |b| {
        let mut buffer = CircularBuffer::new(1024);
        buffer.extend(0..1024u64);
        b.iter(|| black_box(buffer.enqueue(black_box(1u64))));
    });

    group.finish();
}

criterion_group!(benches, bench_end_ops, bench_indexed, bench_adapters);
criterion_main!(benches);
