// File: crates/hexbin-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, sampling defaults).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 960;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 500;

/// Default number of synthetic samples.
pub const SAMPLE_COUNT: usize = 2000;
/// Default standard deviation of both sample coordinates, in pixels.
pub const STD_DEV: f64 = 80.0;
/// Default hexagon radius in pixels.
pub const RADIUS: f64 = 20.0;
/// Default density domain of the color scale.
pub const COLOR_DOMAIN: (f64, f64) = (0.0, 20.0);
/// Default number of axis ticks requested from a scale.
pub const TICK_COUNT: usize = 10;

/// Canvas margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    /// Create new insets in CSS order (non-negative by type).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right), saturating.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(20, 20, 30, 40)
    }
}
