//! Criterion micro-benchmarks for mask construction and propagation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gdt_bench::{open_profile, reference_profile, volume_profile};
use gdt_mask::{Mask, Metric};
use gdt_propagator::DistancePropagator;
use gdt_space::EdgeBehavior;
use std::hint::black_box;

/// Benchmark: build every metric's 3D mask.
fn bench_mask_build(c: &mut Criterion) {
    c.bench_function("mask_build_3d_all_metrics", |b| {
        b.iter(|| {
            for metric in Metric::ALL {
                black_box(Mask::new(metric, 3).unwrap());
            }
        });
    });
}

/// Benchmark: transform the 128x128 maze with each metric.
fn bench_propagate_maze_2d(c: &mut Criterion) {
    let profile = reference_profile(42);
    let mut group = c.benchmark_group("propagate_maze_128x128");
    for metric in Metric::ALL {
        let p = DistancePropagator::new(metric);
        group.bench_with_input(BenchmarkId::from_parameter(metric), &profile, |b, prof| {
            b.iter(|| black_box(p.propagate(&prof.grid, &prof.origin).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: transform the 32^3 maze with each metric.
fn bench_propagate_volume_3d(c: &mut Criterion) {
    let profile = volume_profile(42);
    let mut group = c.benchmark_group("propagate_volume_32x32x32");
    group.sample_size(20);
    for metric in Metric::ALL {
        let p = DistancePropagator::new(metric);
        group.bench_with_input(BenchmarkId::from_parameter(metric), &profile, |b, prof| {
            b.iter(|| black_box(p.propagate(&prof.grid, &prof.origin).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: open 256x256 grid, periodic versus absorbing edges.
fn bench_wrap_vs_absorb(c: &mut Criterion) {
    let profile = open_profile();
    let mut group = c.benchmark_group("propagate_open_256x256");
    for edge in [EdgeBehavior::Wrap, EdgeBehavior::Absorb] {
        let p = DistancePropagator::builder()
            .metric(Metric::Chessboard)
            .edge(edge)
            .build()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{edge:?}")),
            &profile,
            |b, prof| {
                b.iter(|| black_box(p.propagate(&prof.grid, &prof.origin).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_mask_build,
    bench_propagate_maze_2d,
    bench_propagate_volume_3d,
    bench_wrap_vs_absorb
);
criterion_main!(benches);
