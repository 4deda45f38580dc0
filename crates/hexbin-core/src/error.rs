// File: crates/hexbin-core/src/error.rs
// Summary: Error types for configuration validation and chart mounting/rendering.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Invalid chart configuration, reported when the config is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("canvas size must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("margins ({horizontal}px horizontal, {vertical}px vertical) exceed canvas {width}x{height}")]
    MarginsExceedCanvas {
        width: u32,
        height: u32,
        horizontal: u32,
        vertical: u32,
    },

    #[error("hexagon radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("standard deviation must be positive and finite, got {0}")]
    InvalidStdDev(f64),

    #[error("color domain [{0}, {1}] is empty or not finite")]
    InvalidColorDomain(f64, f64),
}

/// Errors raised while mounting or rendering a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A required attribute on the root element is missing or not numeric.
    #[error("root element attribute `{name}` is missing or not numeric")]
    Attribute { name: String },

    #[error("point distribution error: {0}")]
    Distribution(String),

    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
