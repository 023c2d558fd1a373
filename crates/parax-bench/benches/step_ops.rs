//! Criterion micro-benchmarks for engine step throughput.

use criterion::{criterion_group, criterion_main, Criterion};
use parax_bench::{reference_1d, reference_2d, reference_separable};

/// Benchmark: one 1D Crank–Nicolson step on 4K nodes.
fn bench_step_1d_4k(c: &mut Criterion) {
    let mut engine = reference_1d();
    c.bench_function("step_1d_4k", |b| {
        b.iter(|| {
            engine.step().unwrap();
            engine.update();
        });
    });
}

/// Benchmark: one full ADI cycle (both half-steps) on a 128x128 grid.
fn bench_adi_cycle_128(c: &mut Criterion) {
    let mut engine = reference_2d();
    c.bench_function("adi_cycle_128", |b| {
        b.iter(|| {
            engine.step_1().unwrap();
            engine.update();
            engine.step_2().unwrap();
            engine.update();
        });
    });
}

/// Benchmark: one separable step on a 128x128 grid — the scalar
/// off-diagonal fast path.
fn bench_separable_step_128(c: &mut Criterion) {
    let mut engine = reference_separable();
    c.bench_function("separable_step_128", |b| {
        b.iter(|| {
            engine.step().unwrap();
            engine.update();
        });
    });
}

criterion_group!(
    benches,
    bench_step_1d_4k,
    bench_adi_cycle_128,
    bench_separable_step_128
);
criterion_main!(benches);
