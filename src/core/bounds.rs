//! Series extrema + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::error::PlotError;

/// Smallest and largest sample.
///
/// * An empty series is `EmptySeries`.
/// * NaN or infinite samples are `NonFinite` with the offending index.
pub fn extrema(series: &[f64]) -> Result<(f64, f64), PlotError> {
    if series.is_empty() {
        return Err(PlotError::EmptySeries);
    }
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for (index, &v) in series.iter().enumerate() {
        if !v.is_finite() {
            return Err(PlotError::NonFinite { index });
        }
        low = low.min(v);
        high = high.max(v);
    }
    Ok((low, high))
}

/// Characters in the integer part of `v`, sign included (`-12.7` → 3).
#[inline]
#[must_use]
pub fn integer_digits(v: f64) -> usize {
    // `+ 0.0` turns the -0.0 of e.g. trunc(-0.5) into 0.0.
    format!("{:.0}", v.trunc() + 0.0).len()
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}
