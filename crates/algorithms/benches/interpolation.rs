//! Benchmarks for IDW interpolation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use idwgrid_algorithms::interpolation::{idw, idw_grid, IdwParams};
use idwgrid_core::{GridAxis, MeshGrid, SampleSet};

fn create_samples(n: usize) -> SampleSet {
    // Deterministic scatter over [0, 100) x [0, 100)
    let xs = (0..n).map(|i| ((i * 37) % 1000) as f64 / 10.0).collect();
    let ys = (0..n).map(|i| ((i * 91 + 13) % 1000) as f64 / 10.0).collect();
    let values = (0..n).map(|i| ((i * 7) % 100) as f64).collect();
    SampleSet::new(xs, ys, values).unwrap()
}

fn create_mesh(size: usize) -> MeshGrid {
    MeshGrid::new(
        GridAxis::new(0.0, 100.0, size).unwrap(),
        GridAxis::new(0.0, 100.0, size).unwrap(),
    )
    .unwrap()
}

fn bench_idw_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("idw_samples");
    let queries = create_mesh(128).query_points();

    for n in [10, 100, 1000].iter() {
        let samples = create_samples(*n);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| idw(black_box(&samples), black_box(&queries), &IdwParams::default()).unwrap())
        });
    }

    group.finish();
}

fn bench_idw_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("idw_grid");
    let samples = create_samples(100);

    for size in [64, 256, 512].iter() {
        let mesh = create_mesh(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| idw_grid(black_box(&samples), &mesh, &IdwParams::with_power(3.0)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_idw_samples, bench_idw_grid);
criterion_main!(benches);
