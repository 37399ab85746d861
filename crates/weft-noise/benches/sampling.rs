use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use weft_noise::*;

fn bench_white_sample_1d(c: &mut Criterion) {
    let sampler = WhiteNoiseSampler::with_seed(42);
    let x = black_box(0.123_456);
    c.bench_function("white_sample_1d", |bencher| {
        bencher.iter(|| black_box(sampler.sample_1d(x)))
    });
}

fn bench_white_sample_3d(c: &mut Criterion) {
    let sampler = WhiteNoiseSampler::with_seed(42);
    let (x, y, z) = black_box((0.25, -1.5, 3.75));
    c.bench_function("white_sample_3d", |bencher| {
        bencher.iter(|| black_box(sampler.sample_3d(x, y, z)))
    });
}

fn bench_gradient_sample_3d(c: &mut Criterion) {
    let sampler = GradientSampler::new(42);
    let (x, y, z) = black_box((0.25, -1.5, 3.75));
    c.bench_function("gradient_sample_3d", |bencher| {
        bencher.iter(|| black_box(sampler.sample_3d(x, y, z)))
    });
}

fn bench_turbulence_3d_8_octaves(c: &mut Criterion) {
    let sampler = GradientSampler::new(42);
    let params = TurbulenceParams::new(8, 2.0, 0.5);
    let point = black_box(DVec3::new(0.25, -1.5, 3.75));
    c.bench_function("turbulence_3d_8_octaves", |bencher| {
        bencher.iter(|| black_box(turbulence_3d(&sampler, point, &params)))
    });
}

fn bench_array_2d_256(c: &mut Criterion) {
    let sampler = WhiteNoiseSampler::with_seed(42);
    c.bench_function("calculate_array_2d_256", |bencher| {
        bencher.iter(|| black_box(sampler.calculate_array_2d(256, 256, black_box(0.01))))
    });
}

criterion_group!(
    benches,
    bench_white_sample_1d,
    bench_white_sample_3d,
    bench_gradient_sample_3d,
    bench_turbulence_3d_8_octaves,
    bench_array_2d_256,
);
criterion_main!(benches);
