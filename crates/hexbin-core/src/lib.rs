// File: crates/hexbin-core/src/lib.rs
// Summary: Core library entry point; exports the hexbin chart pipeline and its building blocks.

pub mod axis;
pub mod base;
pub mod chart;
pub mod color;
pub mod config;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hexbin;
pub mod layout;
pub mod points;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisTick, Orient};
pub use base::{ChartBase, MountContext, Mounted};
pub use chart::{HexbinChart, MountedHexbin, Plot, RenderOptions};
pub use color::{interpolate_lab, Lab, Rgb};
pub use config::{ColorDomain, HexbinConfig, HexbinConfigBuilder};
pub use dom::Element;
pub use error::{ChartError, ConfigError, Result};
pub use geometry::{Extent, Point};
pub use hexbin::{Bin, Hexbin};
pub use layout::Layout;
pub use points::{generate_points, PointGenerator};
pub use scale::{LinearScale, SequentialScale};
pub use theme::Theme;
pub use types::Insets;
