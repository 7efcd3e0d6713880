//! Criterion micro-benchmarks for model evaluation and irradiance.

use std::hint::black_box;

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plankton_bench::{random_column, reference_profile, stress_profile};
use plankton_models::{model_by_name, predator_prey, pznd, short_wave_radiation, six_component};
use plankton_test_utils::fixtures::{
    predator_prey_parameters, pznd_parameters, six_component_parameters,
};

fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("models");
    for node_count in [1_000usize, 10_000, 100_000] {
        let mut store = random_column(node_count, 42);
        group.throughput(Throughput::Elements(node_count as u64));

        let params = predator_prey_parameters();
        group.bench_with_input(
            BenchmarkId::new("predator_prey", node_count),
            &node_count,
            |b, _| b.iter(|| predator_prey(black_box(&mut store), &params).unwrap()),
        );

        let params = pznd_parameters();
        group.bench_with_input(BenchmarkId::new("pznd", node_count), &node_count, |b, _| {
            b.iter(|| pznd(black_box(&mut store), &params).unwrap())
        });

        let params = six_component_parameters();
        group.bench_with_input(
            BenchmarkId::new("six_component", node_count),
            &node_count,
            |b, _| b.iter(|| six_component(black_box(&mut store), &params).unwrap()),
        );
    }
    group.finish();
}

/// Prebuilt model against the reference profile, excluding validation.
fn bench_prebuilt(c: &mut Criterion) {
    let params = six_component_parameters();
    let model = model_by_name("six_component", &params).unwrap();

    let mut reference = reference_profile(42);
    c.bench_function("six_component_prebuilt_10k", |b| {
        b.iter(|| model.evaluate(black_box(&mut reference)).unwrap())
    });

    let mut stress = stress_profile(42);
    c.bench_function("six_component_prebuilt_100k", |b| {
        b.iter(|| model.evaluate(black_box(&mut stress)).unwrap())
    });
}

fn bench_parameter_validation(c: &mut Criterion) {
    let params = six_component_parameters();
    c.bench_function("six_component_from_parameters", |b| {
        b.iter(|| model_by_name("six_component", black_box(&params)).unwrap())
    });
}

fn bench_irradiance(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let hours: Vec<NaiveDateTime> = (0..24)
        .map(|h| day.and_hms_opt(h, 0, 0).unwrap())
        .collect();
    c.bench_function("short_wave_radiation_24h", |b| {
        b.iter(|| {
            hours
                .iter()
                .map(|t| short_wave_radiation(black_box(t), -30.0, 45.0, 0.4))
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_models,
    bench_prebuilt,
    bench_parameter_validation,
    bench_irradiance
);
criterion_main!(benches);
