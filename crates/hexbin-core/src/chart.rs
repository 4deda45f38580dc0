// File: crates/hexbin-core/src/chart.rs
// Summary: Hexbin chart setup phases, element building, and SVG / Skia PNG output.

use std::path::Path;

use skia_safe as skia;

use crate::axis::{Axis, Orient};
use crate::base::{ChartBase, MountContext, Mounted};
use crate::color::Rgb;
use crate::config::{ColorDomain, HexbinConfig};
use crate::dom::Element;
use crate::error::{ChartError, Result};
use crate::geometry::{fmt_num, Point};
use crate::hexbin::{Bin, Hexbin};
use crate::layout::Layout;
use crate::points::generate_points;
use crate::scale::{LinearScale, SequentialScale};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }
}

/// Everything the setup phases computed for one mount.
#[derive(Debug)]
pub struct Plot {
    pub layout: Layout,
    pub points: Vec<Point>,
    pub hexbin: Hexbin,
    pub bins: Vec<Bin>,
    pub color: SequentialScale,
    pub x: LinearScale,
    pub y: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Plot {
    pub fn fill(&self, bin: &Bin) -> Rgb {
        self.color.color(bin.len() as f64)
    }
}

/// Hexbin density chart component.
#[derive(Clone, Debug, Default)]
pub struct HexbinChart {
    config: HexbinConfig,
    block: Option<String>,
}

impl HexbinChart {
    pub fn new(config: HexbinConfig) -> Self {
        Self { config, block: None }
    }

    pub fn with_block(mut self, text: impl Into<String>) -> Self {
        self.block = Some(text.into());
        self
    }

    pub fn config(&self) -> &HexbinConfig { &self.config }

    /// Run every setup phase and build the element tree.
    pub fn mount(&self) -> Result<MountedHexbin> {
        let mut base = ChartBase::new(self.config.width(), self.config.height());
        if let Some(block) = &self.block {
            base = base.with_block(block.clone());
        }
        let (mounted, plot) = base.mount(|root, ctx| self.setup(root, ctx))?;
        Ok(MountedHexbin { mounted, plot })
    }

    fn setup(&self, root: &mut Element, ctx: &MountContext) -> Result<Plot> {
        let layout = Layout::from_root(root, self.config.margin())?;
        log::debug!("layout: inner {}x{}", layout.width, layout.height);

        let points = generate_points(&layout, &self.config)?;
        let hexbin = Hexbin::new(self.config.radius(), layout.extent())?;
        let bins = hexbin.bin(&points);
        let color = color_scale(&self.config, &bins);

        let x = LinearScale::identity(layout.width);
        let y = LinearScale::inverted(layout.height);
        let y_axis = Axis::left(y).tick_size_inner(-layout.width).tick_size_outer(-layout.width);
        let x_axis = Axis::bottom(x).tick_size_inner(-layout.height).tick_size_outer(-layout.height);

        let plot = Plot { layout, points, hexbin, bins, color, x, y, x_axis, y_axis };
        let g = layout.append_group(root);
        build_chart(g, ctx, &plot);
        Ok(plot)
    }
}

fn color_scale(config: &HexbinConfig, bins: &[Bin]) -> SequentialScale {
    let max = bins.iter().map(Bin::len).max().unwrap_or(0) as f64;
    let domain = match config.color_domain() {
        ColorDomain::Fixed(lo, hi) => {
            if max > hi {
                log::warn!("densest bin holds {max} points, above color domain max {hi}");
            }
            (lo, hi)
        }
        ColorDomain::FromData => (0.0, max.max(1.0)),
    };
    SequentialScale::new(domain, Rgb::WHITE, Rgb::STEELBLUE).with_clamp(config.clamp_colors())
}

/// Clip rect, hexagon paths, then the Y and X axis groups, in that order.
fn build_chart(g: &mut Element, ctx: &MountContext, plot: &Plot) {
    let Layout { width, height, .. } = plot.layout;
    let clip_id = ctx.scoped_id("clip");

    g.append("clipPath")
        .attr("id", &clip_id)
        .append("rect")
        .attr("width", fmt_num(width))
        .attr("height", fmt_num(height));

    let hexagon = plot.hexbin.hexagon();
    let cells = g.append("g");
    cells.attr("class", "hexagon").attr("clip-path", format!("url(#{clip_id})"));
    for bin in &plot.bins {
        cells
            .append("path")
            .attr("d", &hexagon)
            .attr("transform", format!("translate({}, {})", fmt_num(bin.x), fmt_num(bin.y)))
            .attr("fill", plot.fill(bin));
    }

    plot.y_axis.render_into(g.append("g").attr("class", "axis axis--y"));
    plot.x_axis.render_into(
        g.append("g")
            .attr("class", "axis axis--x")
            .attr("transform", format!("translate(0, {})", fmt_num(height))),
    );
}

/// A mounted hexbin chart: element tree plus the computed plot.
#[derive(Debug)]
pub struct MountedHexbin {
    mounted: Mounted,
    plot: Plot,
}

impl MountedHexbin {
    pub fn root(&self) -> &Element { self.mounted.root() }
    pub fn plot(&self) -> &Plot { &self.plot }
    /// Trimmed host block content; excludes axis labels.
    pub fn text(&self) -> &str { self.mounted.text() }

    pub fn to_svg_string(&self) -> String {
        self.mounted.to_svg_string()
    }

    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        write_creating_dirs(path.as_ref(), self.to_svg_string().as_bytes())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_creating_dirs(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let root = self.root();
        let width = attr_i32(root, "width")?;
        let height = attr_i32(root, "height")?;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let layout = self.plot.layout;
        canvas.save();
        canvas.translate((layout.margin.left as f32, layout.margin.top as f32));

        draw_hexagons(canvas, &self.plot);

        let shaper = opts.draw_labels.then(TextShaper::new);
        draw_axis(canvas, &self.plot.y_axis, &opts.theme, shaper.as_ref());
        canvas.save();
        canvas.translate((0.0, layout.height as f32));
        draw_axis(canvas, &self.plot.x_axis, &opts.theme, shaper.as_ref());
        canvas.restore();

        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn attr_i32(e: &Element, name: &str) -> Result<i32> {
    e.get_attr(name)
        .and_then(|v| v.parse::<i32>().ok())
        .ok_or_else(|| ChartError::Attribute { name: name.to_string() })
}

fn write_creating_dirs(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn draw_hexagons(canvas: &skia::Canvas, plot: &Plot) {
    let Layout { width, height, .. } = plot.layout;
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_wh(width as f32, height as f32),
        skia::ClipOp::Intersect,
        true,
    );

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    let vertices = plot.hexbin.hexagon_vertices();
    for bin in &plot.bins {
        let mut path = skia::Path::new();
        let at = |v: &Point| ((bin.x + v.x) as f32, (bin.y + v.y) as f32);
        path.move_to(at(&vertices[0]));
        for v in &vertices[1..] {
            path.line_to(at(v));
        }
        path.close();
        paint.set_color(plot.fill(bin).to_skia());
        canvas.draw_path(&path, &paint);
    }
    canvas.restore();
}

/// Draw an axis at the current origin. Coordinates are (along, across) the
/// axis and swapped for vertical orientations.
fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme, shaper: Option<&TextShaper>) {
    let vertical = matches!(axis.orient, Orient::Left | Orient::Right);
    let k = if matches!(axis.orient, Orient::Left | Orient::Top) { -1.0 } else { 1.0 };
    let pt = |along: f64, across: f64| -> (f32, f32) {
        if vertical { (across as f32, along as f32) } else { (along as f32, across as f32) }
    };

    let mut grid = skia::Paint::default();
    grid.set_anti_alias(true);
    grid.set_style(skia::paint::Style::Stroke);
    grid.set_stroke_width(1.0);
    grid.set_color(theme.grid);

    let mut line = grid.clone();
    line.set_color(theme.axis_line);

    // domain line with outer caps
    let (r0, r1) = (axis.scale.range.0 + 0.5, axis.scale.range.1 + 0.5);
    let outer = k * axis.tick_size_outer;
    canvas.draw_line(pt(r0, 0.5), pt(r1, 0.5), &line);
    if axis.tick_size_outer != 0.0 {
        canvas.draw_line(pt(r0, outer), pt(r0, 0.5), &line);
        canvas.draw_line(pt(r1, 0.5), pt(r1, outer), &line);
    }

    let font_size = 10.0;
    for tick in axis.tick_values() {
        let p = tick.position + 0.5;
        canvas.draw_line(pt(p, 0.0), pt(p, k * axis.tick_size_inner), &grid);
        if let Some(shaper) = shaper {
            let across = k * axis.label_offset();
            let (x, y, anchor) = match axis.orient {
                Orient::Left => (across, p, Anchor::End),
                Orient::Right => (across, p, Anchor::Start),
                Orient::Bottom => (p, across + font_size * 0.5, Anchor::Middle),
                Orient::Top => (p, across - font_size * 0.5, Anchor::Middle),
            };
            shaper.draw(canvas, &tick.label, x as f32, y as f32, font_size as f32, theme.axis_label, anchor);
        }
    }
}
