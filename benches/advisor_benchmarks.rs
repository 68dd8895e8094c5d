//! Benchmarks for the tip advisor evaluation path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_tip::advisor::TipAdvisor;
use fuzzy_tip::surface::ControlSurface;

fn benchmark_evaluate(c: &mut Criterion) {
    let advisor = TipAdvisor::new().expect("model builds");
    let mut group = c.benchmark_group("evaluate");
    for (service, food) in [(0.0, 0.0), (6.5, 6.0), (10.0, 10.0)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{service}_{food}")),
            &(service, food),
            |b, &(service, food)| {
                b.iter(|| {
                    advisor
                        .evaluate(black_box(service), black_box(food))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn benchmark_surface(c: &mut Criterion) {
    let advisor = TipAdvisor::new().expect("model builds");
    c.bench_function("surface_full_grid", |b| {
        b.iter(|| ControlSurface::sample(black_box(&advisor), 1).unwrap())
    });
}

criterion_group!(benches, benchmark_evaluate, benchmark_surface);
criterion_main!(benches);
