// File: crates/hexbin-core/src/color.rs
// Summary: RGB/CIE-Lab colors, named color lookup and Lab interpolation.

use std::fmt;

/// 8-bit sRGB color. Displays as `rgb(r, g, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const STEELBLUE: Rgb = Rgb::new(70, 130, 180);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up a CSS color keyword (the subset charts here use).
    pub fn parse_named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::new(0, 0, 0),
            "steelblue" => Self::STEELBLUE,
            "lightsteelblue" => Self::new(176, 196, 222),
            "navy" => Self::new(0, 0, 128),
            "orange" => Self::new(255, 165, 0),
            "firebrick" => Self::new(178, 34, 34),
            "gray" | "grey" => Self::new(128, 128, 128),
            _ => return None,
        };
        Some(c)
    }

    pub fn to_skia(self) -> skia_safe::Color {
        skia_safe::Color::from_argb(255, self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// CIE L*a*b* color (D50 white point, Bradford-adapted sRGB).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

// D50 reference white
const XN: f64 = 0.96422;
const YN: f64 = 1.0;
const ZN: f64 = 0.82521;
const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

impl From<Rgb> for Lab {
    fn from(c: Rgb) -> Self {
        let r = srgb_to_linear(c.r);
        let g = srgb_to_linear(c.g);
        let b = srgb_to_linear(c.b);
        let y = xyz_to_lab((0.2225045 * r + 0.7168786 * g + 0.0606169 * b) / YN);
        // achromatic input: skip the matrix so a/b are exactly zero
        let (x, z) = if c.r == c.g && c.g == c.b {
            (y, y)
        } else {
            (
                xyz_to_lab((0.4360747 * r + 0.3850649 * g + 0.1430804 * b) / XN),
                xyz_to_lab((0.0139322 * r + 0.0971045 * g + 0.7141733 * b) / ZN),
            )
        };
        Lab { l: 116.0 * y - 16.0, a: 500.0 * (x - y), b: 200.0 * (y - z) }
    }
}

impl From<Lab> for Rgb {
    fn from(c: Lab) -> Self {
        let y = (c.l + 16.0) / 116.0;
        let x = XN * lab_to_xyz(y + c.a / 500.0);
        let z = ZN * lab_to_xyz(y - c.b / 200.0);
        let y = YN * lab_to_xyz(y);
        Rgb {
            r: linear_to_srgb(3.1338561 * x - 1.6168667 * y - 0.4906146 * z),
            g: linear_to_srgb(-0.9787684 * x + 1.9161415 * y + 0.0334540 * z),
            b: linear_to_srgb(0.0719453 * x - 0.2289914 * y + 1.4052427 * z),
        }
    }
}

fn srgb_to_linear(v: u8) -> f64 {
    let x = v as f64 / 255.0;
    if x <= 0.04045 { x / 12.92 } else { ((x + 0.055) / 1.055).powf(2.4) }
}

fn linear_to_srgb(x: f64) -> u8 {
    let v = 255.0 * if x <= 0.0031308 { 12.92 * x } else { 1.055 * x.powf(1.0 / 2.4) - 0.055 };
    if v.is_nan() { return 0; }
    v.round().clamp(0.0, 255.0) as u8
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

/// Interpolate `from` → `to` linearly in Lab space.
/// `t` outside `[0, 1]` extrapolates; channels clamp on conversion back to RGB.
pub fn interpolate_lab(from: Rgb, to: Rgb) -> impl Fn(f64) -> Rgb {
    let a = Lab::from(from);
    let b = Lab::from(to);
    move |t| {
        Rgb::from(Lab {
            l: a.l + (b.l - a.l) * t,
            a: a.a + (b.a - a.a) * t,
            b: a.b + (b.b - a.b) * t,
        })
    }
}
