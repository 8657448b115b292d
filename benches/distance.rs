//! Benchmarks for distance calculations and interning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orthodrome::coordinates::distance::orthodromic_distance;
use orthodrome::{Coordinate, CoordinateRegistry, SphericCoordinate};

fn create_grid(count: usize) -> Vec<SphericCoordinate> {
    (0..count)
        .map(|i| {
            // Points in a band around Erlangen
            let lat = 49.0 + (i as f64 * 0.01) % 2.0;
            let lon = 10.0 + (i as f64 * 0.013) % 2.0;
            SphericCoordinate::on_earth(lat, lon).unwrap()
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let erlangen = SphericCoordinate::on_earth(49.58, 11.01).unwrap();
    let houston = SphericCoordinate::on_earth(29.76, -95.36).unwrap();
    let houston_xyz = houston.to_cartesian();

    let mut group = c.benchmark_group("single_distance");

    group.bench_function("spheric", |b| {
        b.iter(|| orthodromic_distance(black_box(&erlangen), black_box(&houston)))
    });

    group.bench_function("mixed_representation", |b| {
        b.iter(|| black_box(&erlangen).distance_to(black_box(&houston_xyz)))
    });

    group.finish();
}

fn bench_interning(c: &mut Criterion) {
    let mut group = c.benchmark_group("interning");

    for size in [10, 100, 1000, 10000].iter() {
        let points = create_grid(*size);

        group.bench_with_input(BenchmarkId::new("fresh_registry", size), size, |b, _| {
            b.iter(|| {
                let registry = CoordinateRegistry::new();
                for point in &points {
                    black_box(registry.intern_spheric(*point));
                }
            })
        });

        let warm = CoordinateRegistry::new();
        for point in &points {
            warm.intern_spheric(*point);
        }
        group.bench_with_input(BenchmarkId::new("warm_registry", size), size, |b, _| {
            b.iter(|| {
                for point in &points {
                    black_box(warm.intern_spheric(*point));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_interning);
criterion_main!(benches);
