//! End-to-end interpolation of a small lon/lat sample table onto a regular
//! 70 x 50 grid, at the powers commonly compared for IDW maps.

use idwgrid_algorithms::interpolation::{idw_grid, idw_interpolate, IdwParams};
use idwgrid_core::io::{read_samples_from_str, TableOptions};
use idwgrid_core::{GridAxis, MeshGrid, SampleSet};

const SAMPLES: &str = "\
lon\tlat\tvalue
121.39\t13.51\t1.494
126.19\t12.02\t1.934
130.27\t13.11\t2.148
127.42\t10.09\t9.155
126.14\t15.33\t2.221
125.96\t14\t8.1
123.15\t10.88\t2.039
130.5\t11.18\t1.916
129.08\t15.78\t3.729
122.74\t15.82\t7.137
";

fn load_samples() -> SampleSet {
    read_samples_from_str(SAMPLES, &TableOptions::default()).expect("sample table should parse")
}

fn mesh() -> MeshGrid {
    MeshGrid::new(
        GridAxis::new(121.0, 131.0, 70).unwrap(),
        GridAxis::new(10.0, 16.0, 50).unwrap(),
    )
    .unwrap()
}

#[test]
fn grid_shape_matches_mesh() {
    let samples = load_samples();
    assert_eq!(samples.len(), 10);

    let grid = idw_grid(&samples, &mesh(), &IdwParams::default()).unwrap();
    assert_eq!(grid.shape(), (50, 70));

    let stats = grid.statistics();
    assert_eq!(stats.valid_count, 50 * 70);
    assert_eq!(stats.nan_count, 0);
}

#[test]
fn estimates_stay_within_sample_range() {
    let samples = load_samples();
    let (lo, hi) = samples.value_range();

    for power in [1.2, 2.0, 3.0] {
        let grid = idw_grid(&samples, &mesh(), &IdwParams::with_power(power)).unwrap();
        let stats = grid.statistics();
        let (min, max) = (stats.min.unwrap(), stats.max.unwrap());
        assert!(min >= lo - 1e-9, "power {}: min {} below {}", power, min, lo);
        assert!(max <= hi + 1e-9, "power {}: max {} above {}", power, max, hi);
    }
}

#[test]
fn flat_and_grid_forms_agree() {
    let samples = load_samples();
    let mesh = mesh();
    let queries = mesh.query_points();

    let flat = idw_interpolate(
        samples.xs(),
        samples.ys(),
        samples.values(),
        queries.xs(),
        queries.ys(),
        2.0,
    )
    .unwrap();
    let grid = idw_grid(&samples, &mesh, &IdwParams::default()).unwrap();

    let (_, cols) = grid.shape();
    for (k, &v) in flat.iter().enumerate() {
        assert_eq!(grid.get(k / cols, k % cols).unwrap(), v);
    }
}

#[test]
fn query_at_each_sample_is_dominated_by_it() {
    let samples = load_samples();
    let out = idw_interpolate(
        samples.xs(),
        samples.ys(),
        samples.values(),
        samples.xs(),
        samples.ys(),
        2.0,
    )
    .unwrap();

    for (est, &v) in out.iter().zip(samples.values()) {
        assert!((est - v).abs() < 1e-9, "estimate {} vs sample {}", est, v);
    }
}

#[test]
fn higher_power_tracks_samples_more_closely() {
    // Estimate slightly off each sample location; a steeper power keeps it
    // closer to that sample's value.
    let samples = load_samples();
    let xq: Vec<f64> = samples.xs().iter().map(|x| x + 0.05).collect();
    let yq: Vec<f64> = samples.ys().to_vec();

    let error_at = |power: f64| -> f64 {
        idw_interpolate(samples.xs(), samples.ys(), samples.values(), &xq, &yq, power)
            .unwrap()
            .iter()
            .zip(samples.values())
            .map(|(e, v)| (e - v).abs())
            .sum()
    };

    let (e12, e2, e3) = (error_at(1.2), error_at(2.0), error_at(3.0));
    assert!(e12 > e2 && e2 > e3, "errors {} {} {}", e12, e2, e3);
}
