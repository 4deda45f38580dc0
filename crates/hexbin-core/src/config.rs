// File: crates/hexbin-core/src/config.rs
// Summary: Typed chart configuration; invalid combinations are rejected by the builder.

use crate::error::ConfigError;
use crate::types::{Insets, COLOR_DOMAIN, HEIGHT, RADIUS, SAMPLE_COUNT, STD_DEV, WIDTH};

/// How the color scale picks its density domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorDomain {
    /// Fixed `[lo, hi]` bin population range.
    Fixed(f64, f64),
    /// `[0, max bin population]` of the current dataset.
    FromData,
}

impl Default for ColorDomain {
    fn default() -> Self {
        Self::Fixed(COLOR_DOMAIN.0, COLOR_DOMAIN.1)
    }
}

/// Validated hexbin chart configuration.
///
/// Only obtainable through [`HexbinConfigBuilder::build`] (or `Default`), so a
/// value of this type always describes a non-negative drawing area.
#[derive(Clone, Debug, PartialEq)]
pub struct HexbinConfig {
    width: u32,
    height: u32,
    margin: Insets,
    count: usize,
    std_dev: f64,
    radius: f64,
    color_domain: ColorDomain,
    clamp_colors: bool,
    seed: Option<u64>,
}

impl HexbinConfig {
    pub fn builder() -> HexbinConfigBuilder {
        HexbinConfigBuilder::default()
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn margin(&self) -> Insets { self.margin }
    pub fn count(&self) -> usize { self.count }
    pub fn std_dev(&self) -> f64 { self.std_dev }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn color_domain(&self) -> ColorDomain { self.color_domain }
    pub fn clamp_colors(&self) -> bool { self.clamp_colors }
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Builder pre-filled with this configuration.
    pub fn to_builder(&self) -> HexbinConfigBuilder {
        HexbinConfigBuilder {
            width: self.width,
            height: self.height,
            margin: self.margin,
            count: self.count,
            std_dev: self.std_dev,
            radius: self.radius,
            color_domain: self.color_domain,
            clamp_colors: self.clamp_colors,
            seed: self.seed,
        }
    }
}

impl Default for HexbinConfig {
    fn default() -> Self {
        let b = HexbinConfigBuilder::default();
        Self {
            width: b.width,
            height: b.height,
            margin: b.margin,
            count: b.count,
            std_dev: b.std_dev,
            radius: b.radius,
            color_domain: b.color_domain,
            clamp_colors: b.clamp_colors,
            seed: b.seed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HexbinConfigBuilder {
    width: u32,
    height: u32,
    margin: Insets,
    count: usize,
    std_dev: f64,
    radius: f64,
    color_domain: ColorDomain,
    clamp_colors: bool,
    seed: Option<u64>,
}

impl Default for HexbinConfigBuilder {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: Insets::default(),
            count: SAMPLE_COUNT,
            std_dev: STD_DEV,
            radius: RADIUS,
            color_domain: ColorDomain::default(),
            clamp_colors: false,
            seed: None,
        }
    }
}

impl HexbinConfigBuilder {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn color_domain(mut self, domain: ColorDomain) -> Self {
        self.color_domain = domain;
        self
    }

    pub fn clamp_colors(mut self, clamp: bool) -> Self {
        self.clamp_colors = clamp;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<HexbinConfig, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize { width: self.width, height: self.height });
        }
        let horizontal = self.margin.hsum();
        let vertical = self.margin.vsum();
        if horizontal > self.width || vertical > self.height {
            return Err(ConfigError::MarginsExceedCanvas {
                width: self.width,
                height: self.height,
                horizontal,
                vertical,
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if !(self.std_dev.is_finite() && self.std_dev > 0.0) {
            return Err(ConfigError::InvalidStdDev(self.std_dev));
        }
        if let ColorDomain::Fixed(lo, hi) = self.color_domain {
            if !(lo.is_finite() && hi.is_finite()) || lo == hi {
                return Err(ConfigError::InvalidColorDomain(lo, hi));
            }
        }
        Ok(HexbinConfig {
            width: self.width,
            height: self.height,
            margin: self.margin,
            count: self.count,
            std_dev: self.std_dev,
            radius: self.radius,
            color_domain: self.color_domain,
            clamp_colors: self.clamp_colors,
            seed: self.seed,
        })
    }
}
