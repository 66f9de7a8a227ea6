//! # Kernel Storage Benchmark
//!
//! Set/get/snapshot throughput of the component store, plus entity churn.
//!
//! Run with: `cargo bench --package periscope_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use periscope_core::{ComponentStore, EntityRegistry};

/// Benchmark: Create + set a component for N entities.
fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_set");

    for count in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut entities = EntityRegistry::new(count);
                let mut store: ComponentStore<[f32; 4]> = ComponentStore::with_capacity(count);
                for i in 0..count {
                    let id = entities.create();
                    store.set(id, [i as f32; 4]);
                }
                store.len()
            });
        });
    }

    group.finish();
}

/// Benchmark: Random-order lookup of 10k live entities.
fn bench_get(c: &mut Criterion) {
    let count = 10_000usize;
    let mut entities = EntityRegistry::new(count);
    let mut store: ComponentStore<[f32; 4]> = ComponentStore::with_capacity(count);
    let ids: Vec<_> = (0..count)
        .map(|i| {
            let id = entities.create();
            store.set(id, [i as f32; 4]);
            id
        })
        .collect();

    c.bench_function("store_get_10k", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for id in &ids {
                if let Some(v) = store.get(*id) {
                    sum += v[0];
                }
            }
            black_box(sum)
        });
    });
}

/// Benchmark: Snapshot-then-remove, the per-frame decay pattern.
fn bench_snapshot_remove(c: &mut Criterion) {
    let count = 10_000usize;

    c.bench_function("store_snapshot_remove_10k", |b| {
        b.iter_batched(
            || {
                let mut entities = EntityRegistry::new(count);
                let mut store: ComponentStore<f32> = ComponentStore::with_capacity(count);
                for _ in 0..count {
                    let id = entities.create();
                    store.set(id, 1.0);
                }
                store
            },
            |mut store| {
                for id in store.entities() {
                    store.remove(id);
                }
                store.len()
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_set, bench_get, bench_snapshot_remove);
criterion_main!(benches);
