// File: crates/hexbin-core/tests/scale.rs
// Purpose: Linear scales, tick generation and tick label formatting.

use hexbin_core::grid::{tick_format, tick_step, ticks};
use hexbin_core::LinearScale;

#[test]
fn y_scale_is_inverted() {
    let y = LinearScale::inverted(450.0);
    assert_eq!(y.map(0.0), 450.0);
    assert_eq!(y.map(450.0), 0.0);
    assert_eq!(y.map(100.0), 350.0);
    assert_eq!(y.invert(450.0), 0.0);
    assert_eq!(y.invert(350.0), 100.0);
}

#[test]
fn x_scale_is_identity() {
    let x = LinearScale::identity(900.0);
    for v in [0.0, 12.5, 450.0, 900.0] {
        assert_eq!(x.map(v), v);
        assert_eq!(x.invert(v), v);
    }
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let s = LinearScale::new((5.0, 5.0), (10.0, 20.0));
    assert_eq!(s.map(5.0), 10.0);
    assert_eq!(s.map(100.0), 10.0);
}

#[test]
fn ticks_are_round_and_inside_domain() {
    let t = LinearScale::identity(900.0).ticks(10);
    assert_eq!(t, (0..10).map(|i| i as f64 * 100.0).collect::<Vec<_>>());

    let t = LinearScale::inverted(450.0).ticks(10);
    assert_eq!(t, (0..10).map(|i| i as f64 * 50.0).collect::<Vec<_>>());

    for (lo, hi) in [(0.0, 1.0), (-3.7, 12.2), (0.001, 0.0093), (13.0, 987_654.0)] {
        let t = ticks(lo, hi, 10);
        assert!(!t.is_empty());
        assert!(t.iter().all(|v| *v >= lo && *v <= hi), "{t:?} outside [{lo}, {hi}]");
        assert!(t.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn fractional_ticks_avoid_float_drift() {
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn reversed_interval_reverses_ticks() {
    assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    assert_eq!(tick_step(10.0, 0.0, 5), -2.0);
}

#[test]
fn edge_case_ticks() {
    assert!(ticks(0.0, 10.0, 0).is_empty());
    assert!(ticks(f64::NAN, 10.0, 5).is_empty());
    assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
}

#[test]
fn formatting_matches_step_precision() {
    let f = tick_format(0.0, 10_000.0, 10);
    assert_eq!(f(0.0), "0");
    assert_eq!(f(1000.0), "1,000");
    assert_eq!(f(1_234_000.0), "1,234,000");

    let f = tick_format(0.0, 1.0, 5);
    assert_eq!(f(0.2), "0.2");
    assert_eq!(f(1.0), "1.0");

    let f = tick_format(-2000.0, 0.0, 10);
    assert_eq!(f(-1500.0), "\u{2212}1,500");
    assert_eq!(f(-0.0), "0");
}

#[test]
fn scale_formatter_follows_domain() {
    let fmt = LinearScale::identity(900.0).tick_formatter(10);
    assert_eq!(fmt(800.0), "800");
}
