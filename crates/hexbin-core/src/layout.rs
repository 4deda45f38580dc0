// File: crates/hexbin-core/src/layout.rs
// Summary: Layout phase; inner drawing area from the root's declared size minus margins.

use crate::dom::Element;
use crate::error::{ChartError, Result};
use crate::geometry::Extent;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub margin: Insets,
    /// Inner drawing width (canvas width - left - right).
    pub width: f64,
    /// Inner drawing height (canvas height - top - bottom).
    pub height: f64,
}

impl Layout {
    pub fn compute(canvas_width: f64, canvas_height: f64, margin: Insets) -> Self {
        Self {
            margin,
            width: canvas_width - margin.hsum() as f64,
            height: canvas_height - margin.vsum() as f64,
        }
    }

    /// Read `width`/`height` from the component's own root element.
    pub fn from_root(root: &Element, margin: Insets) -> Result<Self> {
        let w = numeric_attr(root, "width")?;
        let h = numeric_attr(root, "height")?;
        Ok(Self::compute(w, h, margin))
    }

    /// `translate(left, top)` for the drawing group.
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    pub fn extent(&self) -> Extent {
        Extent::from_size(self.width, self.height)
    }

    /// Append the translated drawing group to `root` and return it.
    pub fn append_group<'a>(&self, root: &'a mut Element) -> &'a mut Element {
        let g = root.append("g");
        g.attr("transform", self.transform());
        g
    }
}

fn numeric_attr(e: &Element, name: &str) -> Result<f64> {
    e.get_attr(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| ChartError::Attribute { name: name.to_string() })
}
