//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use constants::{
    DECIMAL_PRECISION, DEFAULT_OFFSET, GLYPHS, MAX_PLOT_HEIGHT, MAX_PLOT_WIDTH,
    MIN_PLOT_HEIGHT,
};
pub use error::{ChartError, FormatError, PlotError};
