// File: crates/hexbin-core/src/points.rs
// Summary: Synthetic point generator; two independent normals centered on the drawing area.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::config::HexbinConfig;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::layout::Layout;

/// Samples `(x, y)` with x ~ N(cx, σ) and y ~ N(cy, σ).
#[derive(Clone, Copy, Debug)]
pub struct PointGenerator {
    x: Normal<f64>,
    y: Normal<f64>,
}

impl PointGenerator {
    pub fn new(center: Point, std_dev: f64) -> Result<Self> {
        let x = Normal::new(center.x, std_dev).map_err(|e| ChartError::Distribution(e.to_string()))?;
        let y = Normal::new(center.y, std_dev).map_err(|e| ChartError::Distribution(e.to_string()))?;
        Ok(Self { x, y })
    }

    /// Exactly `count` samples drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Point> {
        (0..count)
            .map(|_| Point::new(self.x.sample(rng), self.y.sample(rng)))
            .collect()
    }
}

/// Generate the configured sample set for `layout`.
/// Seeded configs are reproducible; unseeded ones differ per call.
pub fn generate_points(layout: &Layout, config: &HexbinConfig) -> Result<Vec<Point>> {
    let center = Point::new(layout.width / 2.0, layout.height / 2.0);
    let generator = PointGenerator::new(center, config.std_dev())?;
    let points = match config.seed() {
        Some(seed) => generator.generate(config.count(), &mut StdRng::seed_from_u64(seed)),
        None => generator.generate(config.count(), &mut rand::rng()),
    };
    log::debug!(
        "generated {} points around ({:.1}, {:.1}), sigma={}",
        points.len(),
        center.x,
        center.y,
        config.std_dev()
    );
    Ok(points)
}
