use criterion::{criterion_group, criterion_main, Criterion};
use dosesim::prelude::*;
use std::hint::black_box;

/// Reference worst case from the interactive UI: 24 doses over a 48 h window
/// at 0.01 h resolution (~4800 grid points)
fn heavy_regimen() -> Regimen {
    let mut builder = Regimen::builder();
    for i in 0..24 {
        builder = builder.dose(i as f64 * 2.0, 5.0);
    }
    builder.build().unwrap()
}

fn bench_bolus(c: &mut Criterion) {
    let model = Model::bolus(3.0).unwrap();
    let regimen = heavy_regimen();
    let window = SimulationWindow::new(48.0, 0.01).unwrap();

    c.bench_function("simulate_bolus_24_doses", |b| {
        b.iter(|| {
            let series = black_box(&model).simulate(black_box(&regimen), black_box(&window));
            black_box(series);
        });
    });
}

fn bench_absorption(c: &mut Criterion) {
    let model = Model::with_absorption(3.0, 1.5).unwrap();
    let regimen = heavy_regimen();
    let window = SimulationWindow::new(48.0, 0.01).unwrap();

    c.bench_function("simulate_absorption_24_doses", |b| {
        b.iter(|| {
            let series = black_box(&model).simulate(black_box(&regimen), black_box(&window));
            black_box(series);
        });
    });
}

fn bench_summary(c: &mut Criterion) {
    let model = Model::with_absorption(3.0, 1.5).unwrap();
    let regimen = heavy_regimen();
    let window = SimulationWindow::new(48.0, 0.01).unwrap();
    let series = model.simulate(&regimen, &window);

    c.bench_function("summarize_4800_points", |b| {
        b.iter(|| {
            let metrics = black_box(&series).summary();
            black_box(metrics);
        });
    });
}

criterion_group!(benches, bench_bolus, bench_absorption, bench_summary);
criterion_main!(benches);
