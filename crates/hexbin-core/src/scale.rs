// File: crates/hexbin-core/src/scale.rs
// Summary: Linear (value -> pixel) and sequential (value -> color) scales.

use crate::color::{interpolate_lab, Rgb};
use crate::grid::{tick_format, ticks};

/// Linear map from a domain interval to a range interval.
/// Inverted ranges (`range.0 > range.1`) flip the axis, e.g. for pixel-space Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Identity over `[0, extent]`.
    pub fn identity(extent: f64) -> Self {
        Self::new((0.0, extent), (0.0, extent))
    }

    /// `[0, extent]` mapped onto `[extent, 0]`.
    pub fn inverted(extent: f64) -> Self {
        Self::new((0.0, extent), (extent, 0.0))
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // degenerate domain collapses onto the range start
        if span == 0.0 { return r0; }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 { return d0; }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// Tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Label formatter matched to the tick step for `count`.
    pub fn tick_formatter(&self, count: usize) -> impl Fn(f64) -> String {
        tick_format(self.domain.0, self.domain.1, count)
    }
}

/// Maps a value to a color through a Lab interpolator over `domain`.
pub struct SequentialScale {
    domain: (f64, f64),
    clamp: bool,
    interpolate: Box<dyn Fn(f64) -> Rgb>,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), start: Rgb, end: Rgb) -> Self {
        Self { domain, clamp: false, interpolate: Box::new(interpolate_lab(start, end)) }
    }

    /// Clamp the normalized input to `[0, 1]` instead of extrapolating.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }

    pub fn color(&self, v: f64) -> Rgb {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        // degenerate domain: every value maps to the start color
        let mut t = if span == 0.0 { 0.0 } else { (v - d0) / span };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        (self.interpolate)(t)
    }
}

impl std::fmt::Debug for SequentialScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequentialScale")
            .field("domain", &self.domain)
            .field("clamp", &self.clamp)
            .finish_non_exhaustive()
    }
}
