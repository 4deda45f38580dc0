// File: crates/hexbin-core/src/hexbin.rs
// Summary: Hexagonal binning (pointy-top cells on offset rows) and hexagon outline paths.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::error::ConfigError;
use crate::geometry::{fmt_num, Extent, Point};

/// A populated hexagonal cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    /// Cell center, pixel space.
    pub x: f64,
    pub y: f64,
    pub points: Vec<Point>,
}

impl Bin {
    /// Number of member points.
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn center(&self) -> Point { Point::new(self.x, self.y) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hexbin {
    radius: f64,
    extent: Extent,
    dx: f64,
    dy: f64,
}

impl Hexbin {
    /// Binner over `extent` with cells of circumradius `radius`.
    /// Errors unless `radius` is finite and positive.
    pub fn new(radius: f64, extent: Extent) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        Ok(Self {
            radius,
            extent,
            dx: radius * 2.0 * (PI / 3.0).sin(),
            dy: radius * 1.5,
        })
    }

    pub fn radius(&self) -> f64 { self.radius }
    pub fn extent(&self) -> Extent { self.extent }

    /// Partition `points` into cells. Bins appear in order of their first
    /// member; points with NaN coordinates are skipped.
    pub fn bin(&self, points: &[Point]) -> Vec<Bin> {
        let mut index: HashMap<(i64, i64), usize> = HashMap::new();
        let mut bins: Vec<Bin> = Vec::new();
        for &p in points {
            if p.x.is_nan() || p.y.is_nan() {
                continue;
            }
            let (i, j) = self.cell_of(p);
            match index.get(&(i, j)) {
                Some(&k) => bins[k].points.push(p),
                None => {
                    index.insert((i, j), bins.len());
                    bins.push(Bin {
                        x: (i as f64 + (j & 1) as f64 / 2.0) * self.dx,
                        y: j as f64 * self.dy,
                        points: vec![p],
                    });
                }
            }
        }
        log::debug!("binned {} points into {} cells (r={})", points.len(), bins.len(), self.radius);
        bins
    }

    /// Column/row of the cell containing `p`. Rows alternate a half-column offset.
    fn cell_of(&self, p: Point) -> (i64, i64) {
        let py = p.y / self.dy;
        let mut pj = round_half_up(py);
        let odd = (pj as i64 & 1) as f64;
        let px = p.x / self.dx - odd / 2.0;
        let mut pi = round_half_up(px);
        let py1 = py - pj;

        // near a row boundary: the neighbouring row's cell may be closer
        if py1.abs() * 3.0 > 1.0 {
            let px1 = px - pi;
            let pi2 = pi + (if px < pi { -1.0 } else { 1.0 }) / 2.0;
            let pj2 = pj + (if py < pj { -1.0 } else { 1.0 });
            let px2 = px - pi2;
            let py2 = py - pj2;
            if px1 * px1 + py1 * py1 > px2 * px2 + py2 * py2 {
                pi = pi2 + (if odd != 0.0 { 1.0 } else { -1.0 }) / 2.0;
                pj = pj2;
            }
        }
        (pi as i64, pj as i64)
    }

    /// Outline vertices relative to a cell center, starting at the top.
    pub fn hexagon_vertices(&self) -> [Point; 6] {
        let mut out = [Point::new(0.0, 0.0); 6];
        for (k, v) in out.iter_mut().enumerate() {
            let angle = k as f64 * PI / 3.0;
            *v = Point::new(angle.sin() * self.radius, -angle.cos() * self.radius);
        }
        out
    }

    /// Relative SVG path (`m…l…z`) of one hexagon centered on the origin.
    pub fn hexagon(&self) -> String {
        let mut prev = Point::new(0.0, 0.0);
        let segments: Vec<String> = self
            .hexagon_vertices()
            .iter()
            .map(|v| {
                let seg = format!("{},{}", fmt_num(v.x - prev.x), fmt_num(v.y - prev.y));
                prev = *v;
                seg
            })
            .collect();
        format!("m{}z", segments.join("l"))
    }

    /// Centers of every cell whose center falls inside the padded extent.
    pub fn centers(&self) -> Vec<Point> {
        let mut out = Vec::new();
        let e = self.extent;
        let i = round_half_up(e.x0 / self.dx);
        let mut j = round_half_up(e.y0 / self.dy) as i64;
        let mut y = j as f64 * self.dy;
        while y < e.y1 + self.radius {
            let mut x = i * self.dx + (j & 1) as f64 * self.dx / 2.0;
            while x < e.x1 + self.dx / 2.0 {
                out.push(Point::new(x, y));
                x += self.dx;
            }
            y += self.dy;
            j += 1;
        }
        out
    }
}

// ties go toward +inf so cells on negative coordinates split like positive ones
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
