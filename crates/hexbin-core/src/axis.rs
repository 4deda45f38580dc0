// File: crates/hexbin-core/src/axis.rs
// Summary: Axis model (orientation, tick sizing) rendered into SVG groups with tick gridlines.

use crate::dom::Element;
use crate::geometry::fmt_num;
use crate::scale::LinearScale;
use crate::types::TICK_COUNT;

/// Crisp 1px lines on integer pixel grids.
const OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Top,
    Right,
    Bottom,
    Left,
}

impl Orient {
    /// Direction ticks point away from the plot: -1 for top/left.
    fn k(self) -> f64 {
        match self {
            Orient::Top | Orient::Left => -1.0,
            Orient::Right | Orient::Bottom => 1.0,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Orient::Left | Orient::Right)
    }
}

/// One rendered tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel position along the axis (scale output, before the half-pixel offset).
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Copy, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub scale: LinearScale,
    pub tick_count: usize,
    /// Length of tick lines; negative values extend them across the plot as gridlines.
    pub tick_size_inner: f64,
    /// Length of the end caps of the domain line.
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(orient: Orient, scale: LinearScale) -> Self {
        Self {
            orient,
            scale,
            tick_count: TICK_COUNT,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
        }
    }

    pub fn left(scale: LinearScale) -> Self { Self::new(Orient::Left, scale) }
    pub fn bottom(scale: LinearScale) -> Self { Self::new(Orient::Bottom, scale) }

    /// Set inner and outer tick size together.
    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    pub fn tick_size_inner(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self
    }

    pub fn tick_size_outer(mut self, size: f64) -> Self {
        self.tick_size_outer = size;
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn tick_values(&self) -> Vec<AxisTick> {
        let format = self.scale.tick_formatter(self.tick_count);
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick { value, position: self.scale.map(value), label: format(value) })
            .collect()
    }

    /// Gap between the axis line and the tick label.
    pub fn label_offset(&self) -> f64 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }

    /// The `domain` path: axis line with outer end caps.
    pub fn domain_path(&self) -> String {
        let k = self.orient.k();
        let r0 = fmt_num(self.scale.range.0 + OFFSET);
        let r1 = fmt_num(self.scale.range.1 + OFFSET);
        let outer = fmt_num(k * self.tick_size_outer);
        let o = fmt_num(OFFSET);
        match (self.orient.is_vertical(), self.tick_size_outer == 0.0) {
            (true, false) => format!("M{outer},{r0}H{o}V{r1}H{outer}"),
            (true, true) => format!("M{o},{r0}V{r1}"),
            (false, false) => format!("M{r0},{outer}V{o}H{r1}V{outer}"),
            (false, true) => format!("M{r0},{o}H{r1}"),
        }
    }

    /// Render the axis into `g`: shared text attributes, the domain path, and one
    /// `g.tick` (line + label) per tick value.
    pub fn render_into(&self, g: &mut Element) {
        let k = self.orient.k();
        let anchor = match self.orient {
            Orient::Right => "start",
            Orient::Left => "end",
            Orient::Top | Orient::Bottom => "middle",
        };
        g.attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor);

        g.append("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr("d", self.domain_path());

        let (line_attr, text_attr) = if self.orient.is_vertical() { ("x2", "x") } else { ("y2", "y") };
        let dy = match self.orient {
            Orient::Top => "0em",
            Orient::Bottom => "0.71em",
            Orient::Left | Orient::Right => "0.32em",
        };
        for tick in self.tick_values() {
            let pos = fmt_num(tick.position + OFFSET);
            let transform = if self.orient.is_vertical() {
                format!("translate(0,{pos})")
            } else {
                format!("translate({pos},0)")
            };
            let t = g.append("g");
            t.attr("class", "tick").attr("opacity", 1).attr("transform", transform);
            t.append("line")
                .attr("stroke", "currentColor")
                .attr(line_attr, fmt_num(k * self.tick_size_inner));
            t.append("text")
                .attr("fill", "currentColor")
                .attr(text_attr, fmt_num(k * self.label_offset()))
                .attr("dy", dy)
                .text(tick.label);
        }
    }
}
