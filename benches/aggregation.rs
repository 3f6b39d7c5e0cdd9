//! Aggregation and derivation benchmarks.
//!
//! The hot path in the browser is recompute-on-read: every input event
//! rederives aggregates and the chart series for a whole variable. These
//! benchmarks keep that path honest.
//!
//! Run with: cargo bench --bench aggregation

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pendulum_lab::experiment::{Condition, ExperimentVariable, MeasurementStore};
use pendulum_lab::simulation::compute_angle;
use pendulum_lab::stopwatch::format_elapsed;

fn populated_store(conditions: usize) -> MeasurementStore {
    let mut store = MeasurementStore::new();
    for i in 0..conditions {
        let condition = Condition::new(10.0 + i as f64).unwrap();
        for trial in 0..3 {
            store.record_trial(
                ExperimentVariable::Length,
                condition,
                trial,
                Some(14.0 + trial as f64 * 0.2),
            );
        }
    }
    store
}

fn bench_aggregate(c: &mut Criterion) {
    let store = populated_store(4);
    let condition = Condition::new(10.0).unwrap();

    c.bench_function("aggregate_single_condition", |b| {
        b.iter(|| store.aggregate(black_box(ExperimentVariable::Length), black_box(condition)));
    });
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_for");
    for &conditions in &[4usize, 64] {
        let store = populated_store(conditions);
        group.bench_function(format!("{conditions}_conditions"), |b| {
            b.iter(|| store.series_for(black_box(ExperimentVariable::Length)));
        });
    }
    group.finish();
}

fn bench_format_elapsed(c: &mut Criterion) {
    c.bench_function("format_elapsed", |b| {
        b.iter(|| format_elapsed(black_box(61_234)));
    });
}

fn bench_compute_angle(c: &mut Criterion) {
    c.bench_function("compute_angle", |b| {
        b.iter(|| compute_angle(black_box(0.3), black_box(0.35), black_box(2.0064)));
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_series,
    bench_format_elapsed,
    bench_compute_angle
);
criterion_main!(benches);
