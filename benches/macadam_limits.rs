//! MacAdam limits performance suite.
//!
//! Covers the costs a caller actually pays:
//!
//! 1. Triangulating the optimal colour stimuli of an illuminant (cold cache)
//! 2. Membership queries against a warm cache, single and batched
//! 3. Delaunay construction over random point clouds of increasing size
//! 4. The exact predicates at the core of construction
//!
//! Random inputs come from fixed seeds so runs are comparable.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use macadam::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const ILLUMINANTS: [&str; 3] = ["A", "C", "D65"];
const CLOUD_SIZES: &[usize] = &[100, 500, 1_000];
const QUERY_BATCH_SIZES: &[usize] = &[1, 100, 10_000];

fn random_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new([
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            ])
        })
        .collect()
}

/// Random xyY colours roughly covering the chromaticity diagram.
fn random_xyy(count: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.random_range(0.0..0.75),
                rng.random_range(0.01..0.85),
                rng.random_range(0.0..1.0),
            ]
        })
        .collect()
}

fn bench_stimuli_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("stimuli_triangulation");
    group.sample_size(20);
    for illuminant in ILLUMINANTS {
        group.bench_with_input(
            BenchmarkId::from_parameter(illuminant),
            &illuminant,
            |b, illuminant| {
                b.iter(|| {
                    // A fresh instance per iteration measures the cold path.
                    let limits = MacAdamLimits::default();
                    black_box(limits.optimal_colour_stimuli_triangulation(illuminant).unwrap())
                });
            },
        );
    }
    group.finish();
}

fn bench_membership_queries(c: &mut Criterion) {
    let limits = MacAdamLimits::default();
    for illuminant in ILLUMINANTS {
        limits.optimal_colour_stimuli_triangulation(illuminant).unwrap();
    }

    let mut group = c.benchmark_group("is_within_macadam_limits");
    for &size in QUERY_BATCH_SIZES {
        let queries = random_xyy(size, 0x6d61_6361 + size as u64);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("D65", size), &queries, |b, queries| {
            b.iter(|| black_box(limits.is_within_macadam_limits(queries, "D65", None).unwrap()));
        });
    }
    group.bench_function("single", |b| {
        b.iter(|| {
            black_box(
                limits
                    .is_within_macadam_limits(black_box(&[0.4476, 0.4075, 0.5]), "A", None)
                    .unwrap(),
            )
        });
    });
    group.finish();
}

fn bench_random_clouds(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation_new");
    group.sample_size(20);
    for &count in CLOUD_SIZES {
        let points = random_points(count, 42 + count as u64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| black_box(Triangulation::new(points).unwrap()));
        });
    }
    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let points = random_points(5, 7);
    let [a, b, p, d, e] = [points[0], points[1], points[2], points[3], points[4]];
    let flat = Point::new([0.5, 0.5, 0.0]);
    let base = [
        Point::new([0.0, 0.0, 0.0]),
        Point::new([1.0, 0.0, 0.0]),
        Point::new([0.0, 1.0, 0.0]),
    ];

    let mut group = c.benchmark_group("predicates");
    group.bench_function("orientation", |bench| {
        bench.iter(|| orientation(black_box(&a), black_box(&b), black_box(&p), black_box(&d)));
    });
    group.bench_function("orientation_degenerate", |bench| {
        bench.iter(|| {
            orientation(
                black_box(&base[0]),
                black_box(&base[1]),
                black_box(&base[2]),
                black_box(&flat),
            )
        });
    });
    group.bench_function("insphere", |bench| {
        bench.iter(|| {
            insphere(
                black_box(&a),
                black_box(&b),
                black_box(&p),
                black_box(&d),
                black_box(&e),
            )
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_stimuli_triangulation,
    bench_membership_queries,
    bench_random_clouds,
    bench_predicates
);
criterion_main!(benches);
