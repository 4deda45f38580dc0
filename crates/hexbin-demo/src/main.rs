// File: crates/hexbin-demo/src/main.rs
// Summary: Demo mounts a hexbin density chart of normally distributed samples and writes SVG + PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hexbin_core::{ColorDomain, HexbinChart, HexbinConfig, RenderOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DomainMode {
    /// Fixed [0, 20] bin population range
    Fixed,
    /// [0, densest bin] of the generated sample
    Data,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeName {
    Light,
    Dark,
}

/// Render a hexagonal binning density chart
#[derive(Parser, Debug)]
#[command(name = "hexbin-demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Number of synthetic samples
    #[arg(long, default_value_t = 2000)]
    count: usize,

    /// Hexagon radius in pixels
    #[arg(long, default_value_t = 20.0)]
    radius: f64,

    /// Standard deviation of both sample coordinates
    #[arg(long, default_value_t = 80.0)]
    std_dev: f64,

    /// Seed for reproducible samples (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// How the color scale picks its domain
    #[arg(long, value_enum, default_value_t = DomainMode::Fixed)]
    color_domain: DomainMode,

    /// Raster output theme
    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    theme: ThemeName,

    /// Output directory for hexbin.svg and hexbin.png
    #[arg(long, default_value = "target/out", value_name = "DIR")]
    out_dir: PathBuf,

    /// Skip tick labels in the PNG
    #[arg(long)]
    no_labels: bool,

    /// Block text placed into the chart root
    #[arg(long, value_name = "TEXT")]
    block: Option<String>,
}

fn main() -> Result<()> {
    pretty_env_logger::formatted_timed_builder()
        .filter_module("hexbin_core", log::LevelFilter::Info)
        .filter_module("hexbin_demo", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let color_domain = match args.color_domain {
        DomainMode::Fixed => ColorDomain::default(),
        DomainMode::Data => ColorDomain::FromData,
    };
    let config = HexbinConfig::builder()
        .size(args.width, args.height)
        .count(args.count)
        .radius(args.radius)
        .std_dev(args.std_dev)
        .seed(args.seed)
        .color_domain(color_domain)
        .build()
        .context("invalid chart configuration")?;

    let mut chart = HexbinChart::new(config);
    if let Some(block) = args.block {
        chart = chart.with_block(block);
    }
    let mounted = chart.mount().context("failed to mount hexbin chart")?;
    let plot = mounted.plot();
    let densest = plot.bins.iter().map(|b| b.len()).max().unwrap_or(0);
    log::info!(
        "{} points in {} bins (densest {}), drawing area {}x{}",
        plot.points.len(),
        plot.bins.len(),
        densest,
        plot.layout.width,
        plot.layout.height
    );

    let svg_path = args.out_dir.join("hexbin.svg");
    mounted
        .render_to_svg(&svg_path)
        .with_context(|| format!("failed to write '{}'", svg_path.display()))?;

    let opts = RenderOptions {
        theme: hexbin_core::theme::find(match args.theme {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }),
        draw_labels: !args.no_labels,
    };
    let png_path = args.out_dir.join("hexbin.png");
    mounted
        .render_to_png(&opts, &png_path)
        .with_context(|| format!("failed to write '{}'", png_path.display()))?;

    if !mounted.text().is_empty() {
        println!("{}", mounted.text());
    }
    println!("Wrote {}", svg_path.display());
    println!("Wrote {}", png_path.display());
    Ok(())
}
