// File: crates/hexbin-core/tests/color.rs
// Purpose: RGB <-> Lab conversion, Lab interpolation and the density color scale.

use hexbin_core::{interpolate_lab, Lab, Rgb, SequentialScale};

fn close(a: Rgb, b: Rgb) -> bool {
    let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 1;
    d(a.r, b.r) && d(a.g, b.g) && d(a.b, b.b)
}

#[test]
fn white_is_l100_neutral() {
    let lab = Lab::from(Rgb::WHITE);
    assert!((lab.l - 100.0).abs() < 1e-6, "L = {}", lab.l);
    assert_eq!(lab.a, 0.0);
    assert_eq!(lab.b, 0.0);
}

#[test]
fn named_colors_round_trip() {
    for name in ["white", "black", "steelblue", "lightsteelblue", "navy", "orange", "firebrick", "gray"] {
        let c = Rgb::parse_named(name).expect("known color");
        let back = Rgb::from(Lab::from(c));
        assert!(close(c, back), "{name}: {c} -> {back}");
    }
    assert_eq!(Rgb::parse_named("SteelBlue"), Some(Rgb::STEELBLUE));
    assert_eq!(Rgb::parse_named("no-such-color"), None);
}

#[test]
fn steelblue_lab_values() {
    let lab = Lab::from(Rgb::STEELBLUE);
    assert!((lab.l - 52.47).abs() < 0.1, "L = {}", lab.l);
    assert!(lab.b < -20.0, "steelblue should sit on the blue side, b = {}", lab.b);
}

#[test]
fn displays_as_css_rgb() {
    assert_eq!(Rgb::new(70, 130, 180).to_string(), "rgb(70, 130, 180)");
    assert_eq!(Rgb::WHITE.to_string(), "rgb(255, 255, 255)");
}

#[test]
fn interpolation_hits_endpoints() {
    let i = interpolate_lab(Rgb::WHITE, Rgb::STEELBLUE);
    assert!(close(i(0.0), Rgb::WHITE));
    assert!(close(i(1.0), Rgb::STEELBLUE));
    let mid = i(0.5);
    assert!(mid.b > Rgb::STEELBLUE.b && mid.r < 255);
}

#[test]
fn density_scale_spans_white_to_steelblue() {
    let s = SequentialScale::new((0.0, 20.0), Rgb::WHITE, Rgb::STEELBLUE);
    assert!(close(s.color(0.0), Rgb::WHITE));
    assert!(close(s.color(20.0), Rgb::STEELBLUE));

    // monotone darkening with density
    let ls: Vec<f64> = (0..=20).map(|n| Lab::from(s.color(n as f64)).l).collect();
    assert!(ls.windows(2).all(|w| w[1] <= w[0] + 1e-9));
}

#[test]
fn unclamped_scale_extrapolates_clamped_does_not() {
    let s = SequentialScale::new((0.0, 20.0), Rgb::WHITE, Rgb::STEELBLUE);
    let beyond = s.color(40.0);
    assert_ne!(beyond, s.color(20.0));
    assert!(Lab::from(beyond).l < Lab::from(Rgb::STEELBLUE).l);

    let clamped = SequentialScale::new((0.0, 20.0), Rgb::WHITE, Rgb::STEELBLUE).with_clamp(true);
    assert_eq!(clamped.color(40.0), clamped.color(20.0));
    assert_eq!(clamped.color(-5.0), clamped.color(0.0));
}

#[test]
fn density_scale_reference_values() {
    let s = SequentialScale::new((0.0, 20.0), Rgb::WHITE, Rgb::STEELBLUE);
    assert_eq!(s.color(10.0).to_string(), "rgb(166, 191, 217)");
    assert_eq!(s.color(5.0).to_string(), "rgb(211, 222, 236)");
    assert_eq!(s.color(1.0).to_string(), "rgb(246, 248, 251)");
}

#[test]
fn degenerate_domain_maps_to_start_color() {
    let s = SequentialScale::new((5.0, 5.0), Rgb::WHITE, Rgb::STEELBLUE);
    assert_eq!(s.color(5.0), Rgb::WHITE);
    assert_eq!(s.color(100.0), Rgb::WHITE);
}
