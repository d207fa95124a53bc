//! 粒子场构建性能基准测试
//!
//! 测试球面降级和轮廓投影两条路径的构建耗时

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_field::config::FieldConfig;
use particle_field::field::ParticleFieldBuilder;
use particle_field::sources::{GradientImageSource, ImageSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_sphere_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_fallback");

    for count in [1000usize, 10000, 100000] {
        let builder =
            ParticleFieldBuilder::new(FieldConfig::default().with_particle_count(count)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(builder.build_with_rng(None, &mut rng)));
        });
    }

    group.finish();
}

fn bench_silhouette_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("silhouette_projection");

    let image = GradientImageSource::new(256).load().unwrap();
    for count in [1000usize, 10000, 100000] {
        let builder =
            ParticleFieldBuilder::new(FieldConfig::default().with_particle_count(count)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(builder.build_with_rng(Some(&image), &mut rng)));
        });
    }

    group.finish();
}

fn bench_valid_pixel_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_pixel_scan");

    for size in [128u32, 512] {
        let image = GradientImageSource::new(size).load().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(image.valid_pixels(10)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sphere_fallback,
    bench_silhouette_projection,
    bench_valid_pixel_scan
);
criterion_main!(benches);
