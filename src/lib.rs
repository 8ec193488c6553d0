//! Public-facing crate root – re-exports + the one-shot `plot`.
//!
//! ```
//! use box_chart::{Config, plot};
//!
//! let cfg = Config::builder().height(4).build().unwrap();
//! let chart = plot(&[1.0, 3.0, 10.0, 7.0], &cfg, None).unwrap();
//! assert_eq!(chart.lines().count(), 4);
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    constants::{DECIMAL_PRECISION, DEFAULT_OFFSET, GLYPHS},
    data::{ParseSeriesError, read_series, read_series_from_path},
    error::{ChartError, FormatError, PlotError},
};

pub use render::{AxisLabels, Grid, LabelFormat, Scale, plot};
