//! Criterion micro-benchmarks for binding neurons into a region.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use neurite_arena::{ArenaConfig, ParamArena};
use neurite_core::{FieldRole, NetworkId, OptimizerKind, ParamReader, UnitAddr};
use neurite_neuron::UnboundNeuron;

const UNITS: u32 = 1_000;
const FAN_IN: u32 = 64;

fn make_arena(kind: OptimizerKind) -> ParamArena {
    let units = (0..UNITS).map(|_| (FAN_IN, kind));
    ParamArena::new(ArenaConfig::planned(NetworkId(0), units).unwrap()).unwrap()
}

/// Benchmark: bind 1K neurons with fan-in 64, per optimizer kind.
fn bench_bind_1k(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind_1k");
    for kind in OptimizerKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut arena = make_arena(kind);
                for i in 0..UNITS {
                    let neuron = UnboundNeuron::new(UnitAddr::new(0, 1, i), FAN_IN)
                        .bind(&mut arena, kind)
                        .unwrap();
                    black_box(neuron);
                }
                black_box(arena.used());
            });
        });
    }
    group.finish();
}

/// Benchmark: typed-view weight write across 1K neurons.
fn bench_typed_write(c: &mut Criterion) {
    let mut arena = make_arena(OptimizerKind::Adam);
    let neurons: Vec<_> = (0..UNITS)
        .map(|i| {
            UnboundNeuron::new(UnitAddr::new(0, 1, i), FAN_IN)
                .bind(&mut arena, OptimizerKind::Adam)
                .unwrap()
        })
        .collect();

    c.bench_function("typed_write_1k", |b| {
        b.iter(|| {
            for n in &neurons {
                for (j, w) in n.weights().write(&mut arena).iter_mut().enumerate() {
                    *w = j as f64;
                }
            }
            black_box(arena.region()[1]);
        });
    });
}

/// Benchmark: address-path lookup of every neuron's weights.
fn bench_path_read(c: &mut Criterion) {
    let mut arena = make_arena(OptimizerKind::Plain);
    for i in 0..UNITS {
        UnboundNeuron::new(UnitAddr::new(0, 1, i), FAN_IN)
            .bind(&mut arena, OptimizerKind::Plain)
            .unwrap();
    }

    c.bench_function("path_read_1k", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..UNITS {
                let w = arena.read(UnitAddr::new(0, 1, i), FieldRole::Weights).unwrap();
                sum += w[0];
            }
            black_box(sum);
        });
    });
}

criterion_group!(benches, bench_bind_1k, bench_typed_write, bench_path_read);
criterion_main!(benches);
