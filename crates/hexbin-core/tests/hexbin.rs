// File: crates/hexbin-core/tests/hexbin.rs
// Purpose: Hexagonal binning: partitioning, cell centers and hexagon outlines.

use hexbin_core::{ConfigError, Extent, Hexbin, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn hexbin() -> Hexbin {
    Hexbin::new(20.0, Extent::from_size(900.0, 450.0)).expect("valid radius")
}

#[test]
fn bins_partition_the_points() {
    let mut rng = StdRng::seed_from_u64(11);
    let pts: Vec<Point> = (0..5000)
        .map(|_| Point::new(rng.random_range(-50.0..950.0), rng.random_range(-50.0..500.0)))
        .collect();
    let bins = hexbin().bin(&pts);

    assert_eq!(bins.iter().map(|b| b.len()).sum::<usize>(), pts.len());
    assert!(bins.iter().all(|b| !b.is_empty()));

    // no two bins share a center
    let mut centers: Vec<(i64, i64)> = bins
        .iter()
        .map(|b| ((b.x * 1000.0).round() as i64, (b.y * 1000.0).round() as i64))
        .collect();
    centers.sort_unstable();
    centers.dedup();
    assert_eq!(centers.len(), bins.len());
}

#[test]
fn every_point_lies_within_its_cell() {
    let mut rng = StdRng::seed_from_u64(12);
    let pts: Vec<Point> = (0..2000)
        .map(|_| Point::new(rng.random_range(0.0..900.0), rng.random_range(0.0..450.0)))
        .collect();
    for bin in hexbin().bin(&pts) {
        for p in &bin.points {
            let d = ((p.x - bin.x).powi(2) + (p.y - bin.y).powi(2)).sqrt();
            assert!(d <= 20.0 + 1e-9, "point {p:?} is {d} from center ({}, {})", bin.x, bin.y);
        }
    }
}

#[test]
fn single_points_land_on_expected_centers() {
    let h = hexbin();
    let dx = 40.0 * (std::f64::consts::PI / 3.0).sin();

    let bins = h.bin(&[Point::new(0.0, 0.0)]);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].center(), Point::new(0.0, 0.0));

    // odd rows shift by half a column
    let bins = h.bin(&[Point::new(10.0, 31.0)]);
    assert_eq!(bins.len(), 1);
    assert!((bins[0].x - dx / 2.0).abs() < 1e-9);
    assert_eq!(bins[0].y, 30.0);
}

#[test]
fn bins_keep_first_seen_order() {
    let h = hexbin();
    let pts = [
        Point::new(300.0, 300.0),
        Point::new(0.0, 0.0),
        Point::new(301.0, 299.0),
        Point::new(600.0, 90.0),
    ];
    let bins = h.bin(&pts);
    assert_eq!(bins.len(), 3);
    assert_eq!(bins[0].len(), 2);
    assert_eq!(bins[1].center(), Point::new(0.0, 0.0));
    assert_eq!(bins[2].points, vec![Point::new(600.0, 90.0)]);
}

#[test]
fn nan_points_are_skipped() {
    let bins = hexbin().bin(&[Point::new(f64::NAN, 10.0), Point::new(5.0, f64::NAN), Point::new(5.0, 5.0)]);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].len(), 1);
    assert!(hexbin().bin(&[]).is_empty());
}

#[test]
fn hexagon_path_has_six_segments_and_closes() {
    let d = hexbin().hexagon();
    assert!(d.starts_with("m0,-20l"), "{d}");
    assert!(d.ends_with('z'));
    assert_eq!(d.matches('m').count(), 1);
    assert_eq!(d.matches('l').count(), 5);

    let v = hexbin().hexagon_vertices();
    for p in v {
        assert!(((p.x * p.x + p.y * p.y).sqrt() - 20.0).abs() < 1e-9);
    }
    assert_eq!(v[0], Point::new(0.0, -20.0));
    assert!((v[3].y - 20.0).abs() < 1e-9);
}

#[test]
fn centers_cover_the_extent() {
    let h = Hexbin::new(10.0, Extent::from_size(100.0, 60.0)).expect("valid radius");
    let centers = h.centers();
    assert!(!centers.is_empty());
    assert_eq!(centers[0], Point::new(0.0, 0.0));
    assert!(centers.iter().all(|c| c.y < 60.0 + 10.0));
}

#[test]
fn extent_helpers() {
    let e = Extent::new(10.0, 20.0, 110.0, 70.0);
    assert_eq!((e.width(), e.height()), (100.0, 50.0));
    assert!(e.contains(Point::from((10.0, 70.0))));
    assert!(!e.contains(Point::new(9.9, 30.0)));
    let h = Hexbin::new(5.0, e).expect("valid radius");
    assert_eq!(h.extent(), e);
    assert_eq!(h.radius(), 5.0);
}

#[test]
fn non_positive_radius_is_rejected() {
    let e = Extent::from_size(10.0, 10.0);
    assert_eq!(Hexbin::new(0.0, e), Err(ConfigError::NonPositiveRadius(0.0)));
    assert_eq!(Hexbin::new(-5.0, e), Err(ConfigError::NonPositiveRadius(-5.0)));
    assert!(matches!(Hexbin::new(f64::NAN, e), Err(ConfigError::NonPositiveRadius(r)) if r.is_nan()));
    assert!(matches!(Hexbin::new(f64::INFINITY, e), Err(ConfigError::NonPositiveRadius(_))));
}

#[test]
fn centers_round_half_way_origins_upward() {
    // origin exactly half a column and half a row below zero
    let dx = 20.0 * (std::f64::consts::PI / 3.0).sin();
    let h = Hexbin::new(10.0, Extent::new(-dx / 2.0, -7.5, 50.0, 30.0)).expect("valid radius");
    let centers = h.centers();
    assert_eq!(centers[0], Point::new(0.0, 0.0));
    assert!(centers.iter().all(|c| c.y >= 0.0));
}
