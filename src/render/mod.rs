//! Series → text. Each stage feeds the next:
//! scale → labels → grid → title.

pub mod grid;
pub mod label;
pub mod scale;
pub mod title;

use log::debug;

pub use grid::{Grid, rasterize};
pub use label::{AxisLabels, LabelFormat};
pub use scale::Scale;
pub use title::overlay;

use crate::core::{bounds::extrema, config::Config, error::PlotError};

/// Render `series` as a multi-line chart.
///
/// An empty `title` is the same as none. Lines are joined with `\n` and the
/// result has no trailing newline.
pub fn plot(series: &[f64], config: &Config, title: Option<&str>) -> Result<String, PlotError> {
    let title = title.filter(|t| !t.is_empty());
    let (_, series_max) = extrema(series)?;

    let scale = Scale::resolve(series, config, title.is_some())?;
    let axis = AxisLabels::build(&scale, series_max, config)?;
    debug!(
        "scale: [{}, {}] over {} rows, ratio {}, axis {} cols",
        scale.minimum, scale.maximum, scale.height, scale.ratio, axis.axis_len
    );

    let text = rasterize(series, &scale, &axis, config.width)?.to_text();
    Ok(match title {
        Some(t) => overlay(&text, t),
        None => text,
    })
}
