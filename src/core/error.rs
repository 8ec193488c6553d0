//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseSeriesError;

/// Faults in a label template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No `{...}` placeholder at all.
    MissingPlaceholder,
    /// More than one placeholder.
    ExtraPlaceholder,
    /// A `{` or `}` without its partner.
    UnbalancedBrace(usize),
    /// Spec text that could not be understood, e.g. `{:8.2q}`.
    BadSpec(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingPlaceholder => write!(f, "label format has no `{{}}` placeholder"),
            FormatError::ExtraPlaceholder => {
                write!(f, "label format has more than one placeholder")
            }
            FormatError::UnbalancedBrace(at) => {
                write!(f, "label format has an unmatched brace at byte {at}")
            }
            FormatError::BadSpec(spec) => write!(f, "unsupported label format spec `{spec}`"),
        }
    }
}
impl Error for FormatError {}

/// Everything that can stop a chart from being drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    EmptySeries,
    NonFinite { index: usize },
    NonFiniteBound(f64),
    InvalidRange { minimum: f64, maximum: f64 },
    InvalidHeight { height: usize },
    /// `rows` is the requested or derived row count, possibly infinite.
    HeightTooLarge { rows: f64, limit: usize },
    WidthTooSmall { width: usize, axis_len: usize },
    WidthTooLarge { width: usize, limit: usize },
    Format(FormatError),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::EmptySeries => write!(f, "series is empty"),
            PlotError::NonFinite { index } => {
                write!(f, "sample {index} is not a finite number")
            }
            PlotError::NonFiniteBound(v) => write!(f, "axis bound {v} is not a finite number"),
            PlotError::InvalidRange { minimum, maximum } => {
                write!(f, "minimum {minimum} cannot exceed maximum {maximum}")
            }
            PlotError::InvalidHeight { height } => {
                write!(f, "plot height {height} is too small, need at least 2 rows")
            }
            PlotError::HeightTooLarge { rows, limit } => {
                write!(f, "value span needs {rows} rows, more than the limit of {limit}")
            }
            PlotError::WidthTooLarge { width, limit } => {
                write!(f, "width {width} exceeds the limit of {limit} columns")
            }
            PlotError::WidthTooSmall { width, axis_len } => write!(
                f,
                "width {width} leaves no room for data next to a {axis_len}-column axis"
            ),
            PlotError::Format(e) => write!(f, "{e}"),
        }
    }
}
impl Error for PlotError {}

impl From<FormatError> for PlotError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

/// Top-level error type bubbled up by the command line front end.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Parse(ParseSeriesError),
    Plot(PlotError),
    Logger(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Parse(e) => write!(f, "{e}"),
            ChartError::Plot(e) => write!(f, "{e}"),
            ChartError::Logger(e) => write!(f, "could not start logger: {e}"),
        }
    }
}
impl Error for ChartError {}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseSeriesError> for ChartError {
    fn from(e: ParseSeriesError) -> Self {
        Self::Parse(e)
    }
}
impl From<PlotError> for ChartError {
    fn from(e: PlotError) -> Self {
        Self::Plot(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_failures_surface_as_io() {
        let e: ChartError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(e, ChartError::Io(_)));
        assert_eq!(e.to_string(), "pipe closed");
    }

    #[test]
    fn plot_errors_keep_their_message() {
        let e: ChartError = PlotError::HeightTooLarge {
            rows: 2e4,
            limit: 10_000,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "value span needs 20000 rows, more than the limit of 10000"
        );
    }
}
