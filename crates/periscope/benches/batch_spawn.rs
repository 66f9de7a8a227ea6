//! # Burst Spawn Benchmark
//!
//! Validates the pooled-batch path against the naive one-event-per-spawn
//! path under burst load (a depth charge detonating across the screen).
//!
//! Run with: `cargo bench --package periscope`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use periscope::systems::FadeoutSystem;
use periscope::{Color, FadeoutSpawn, GameEvent, RuntimeConfig, Scheduler};

fn entry(i: i32) -> FadeoutSpawn {
    FadeoutSpawn {
        x: i % 80,
        y: i / 80,
        glyph: '*',
        fg: Color::BrightRed,
        bg: Color::Black,
    }
}

/// One frame that ingests a burst of N spawns via the pooled batch event.
fn bench_pooled_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("burst_spawn_pooled");

    for count in [64, 512, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut scheduler = Scheduler::new(&RuntimeConfig::default());
            scheduler.register(Box::new(FadeoutSystem::new()));
            let sender = scheduler.sender();

            b.iter(|| {
                let pool = scheduler.world().resources.batch_pool();
                let batch = {
                    let mut pool = pool.lock();
                    let handle = pool.acquire();
                    let entries = pool.entries_mut(handle).unwrap();
                    entries.extend((0..count).map(entry));
                    handle
                };
                sender.send(GameEvent::FadeoutSpawnBatch { batch });
                scheduler.tick(0.0);

                // Sweep the particles out so frames stay comparable.
                sender.send(GameEvent::SessionReset);
                scheduler.tick(0.0);
            });
        });
    }

    group.finish();
}

/// The same burst as individual spawn events, for comparison.
fn bench_individual_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("burst_spawn_individual");

    for count in [64, 512, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut scheduler = Scheduler::new(&RuntimeConfig {
                event_capacity: 8192,
                ..RuntimeConfig::default()
            });
            scheduler.register(Box::new(FadeoutSystem::new()));
            let sender = scheduler.sender();

            b.iter(|| {
                for i in 0..count {
                    sender.send(GameEvent::FadeoutSpawn { spawn: entry(i) });
                }
                scheduler.tick(0.0);

                sender.send(GameEvent::SessionReset);
                scheduler.tick(0.0);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pooled_batch, bench_individual_events);
criterion_main!(benches);
