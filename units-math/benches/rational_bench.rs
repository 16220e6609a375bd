use criterion::{black_box, criterion_group, criterion_main, Criterion};
use units_math::{normalize, Dim, Rational};

fn rational_arithmetic_benchmark(c: &mut Criterion) {
    let a = Rational::new(-3, 4).unwrap_or_default();
    let b = Rational::new(5, 6).unwrap_or_default();

    c.bench_function("rational normalize", |bench| bench.iter(|| normalize(black_box(-36), black_box(48))));
    c.bench_function("rational add", |bench| bench.iter(|| black_box(a) + black_box(b)));
    c.bench_function("rational mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("rational cmp", |bench| bench.iter(|| black_box(a) < black_box(b)));
}

fn dim_algebra_benchmark(c: &mut Criterion) {
    let energy = Dim::from_integers([-2, 2, 1, 0, 0]).unwrap_or_default();
    let half = Rational::HALF;

    c.bench_function("dim combine", |bench| bench.iter(|| black_box(energy) - black_box(Dim::CHARGE)));
    c.bench_function("dim scale", |bench| bench.iter(|| black_box(energy) * black_box(half)));
    c.bench_function("dim display", |bench| bench.iter(|| black_box(energy).to_string()));
}

criterion_group!(benches, rational_arithmetic_benchmark, dim_algebra_benchmark);
criterion_main!(benches);
