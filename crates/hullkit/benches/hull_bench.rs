//! Criterion benchmarks for the hull kernel.
//! Focus sizes: n in {8, 32, 128, 512} (interactive clouds are at the low end).
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullkit::geom2::{compute_hull, overlaps, point_in_hull, Hull};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cloud(n: usize, seed: u64, center: Vector2<f64>) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            // uniform in a disc so a fair share of points end up interior
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = rng.gen::<f64>().sqrt() * 100.0;
            center + Vector2::new(theta.cos() * r, theta.sin() * r)
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("quickhull", n), &n, |b, &n| {
            b.iter_batched(
                || random_cloud(n, 43, Vector2::zeros()),
                |pts| {
                    let _h = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("point_in_hull", n), &n, |b, &n| {
            let hull = compute_hull(&random_cloud(n, 44, Vector2::zeros())).unwrap();
            let queries = random_cloud(64, 45, Vector2::new(20.0, 0.0));
            b.iter(|| queries.iter().filter(|q| point_in_hull(**q, &hull)).count())
        });
    }

    // Overlap cost grows with |A|·|B| before the re-hull.
    for &n in &[8usize, 32] {
        group.bench_with_input(BenchmarkId::new("overlap", n), &n, |b, &n| {
            let ha: Hull = compute_hull(&random_cloud(n, 46, Vector2::zeros())).unwrap();
            let hb: Hull = compute_hull(&random_cloud(n, 47, Vector2::new(150.0, 0.0))).unwrap();
            b.iter(|| overlaps(&ha, &hb, Vector2::zeros()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
