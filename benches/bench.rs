use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use laguerre::{complex, laguerre, num::Complex, ClosedForm};

criterion_main!(solver_benches);
criterion_group!(solver_benches, quadratic, sextic, complex_sweep);

pub fn quadratic(c: &mut Criterion) {
    let f = ClosedForm::new(
        |z: Complex<f64>| z * z - complex!(1.0),
        |z: Complex<f64>| z * complex!(2.0),
        |_: Complex<f64>| complex!(2.0),
    );
    let mut group = c.benchmark_group("quadratic");
    for x0 in [2.0, 10.0, 100.0, 1000.0] {
        group.bench_function(BenchmarkId::from_parameter(x0), |b| {
            b.iter(|| black_box(laguerre(&f, 2, complex!(black_box(x0)), 1E-12, 100)))
        });
    }
    group.finish();
}

pub fn sextic(c: &mut Criterion) {
    let f = ClosedForm::new(
        |z: Complex<f64>| z.powi(6) - complex!(1.0),
        |z: Complex<f64>| z.powi(5) * complex!(6.0),
        |z: Complex<f64>| z.powi(4) * complex!(30.0),
    );
    let mut group = c.benchmark_group("sextic");
    for x0 in [2.0, 10.0, 100.0, 1000.0] {
        group.bench_function(BenchmarkId::from_parameter(x0), |b| {
            b.iter(|| black_box(laguerre(&f, 6, complex!(black_box(x0)), 1E-12, 100)))
        });
    }
    group.finish();
}

pub fn complex_sweep(c: &mut Criterion) {
    let f = ClosedForm::new(
        |z: Complex<f64>| z.powi(6) - complex!(1.0),
        |z: Complex<f64>| z.powi(5) * complex!(6.0),
        |z: Complex<f64>| z.powi(4) * complex!(30.0),
    );
    let guesses: Vec<_> = laguerre::__testing::RandStreamC64Cartesian::new(1, -2.0, 2.0, -2.0, 2.0)
        .take(64)
        .collect();
    c.bench_function("sweep 64 complex guesses", |b| {
        b.iter(|| {
            for &x0 in &guesses {
                let _ = black_box(laguerre(&f, 6, x0, 1E-12, 100));
            }
        })
    });
}
