//! Value range, vertical resolution and the value → row mapping.

use crate::core::{
    bounds::extrema,
    config::Config,
    constants::{MAX_PLOT_HEIGHT, MIN_PLOT_HEIGHT},
    error::PlotError,
};

/// Resolved vertical geometry of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub minimum: f64,
    pub maximum: f64,
    /// Body rows, title line excluded.
    pub height: usize,
    /// Value span covered by one row; zero on a degenerate range.
    pub ratio: f64,
}

impl Scale {
    /// Resolve bounds and height against `series`.
    ///
    /// When `titled`, one row of the requested (or derived) height is given
    /// to the title before `ratio` is computed.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn resolve(series: &[f64], config: &Config, titled: bool) -> Result<Self, PlotError> {
        let (low, high) = extrema(series)?;
        let minimum = config.minimum.unwrap_or(low);
        let maximum = config.maximum.unwrap_or(high);
        for bound in [minimum, maximum] {
            if !bound.is_finite() {
                return Err(PlotError::NonFiniteBound(bound));
            }
        }
        if minimum > maximum {
            return Err(PlotError::InvalidRange { minimum, maximum });
        }

        let interval = maximum - minimum;
        let degenerate = interval == 0.0;
        let reserved = usize::from(titled);

        let too_large = |rows: f64| PlotError::HeightTooLarge {
            rows,
            limit: MAX_PLOT_HEIGHT,
        };
        // Span of two finite bounds can still overflow to infinity.
        if !interval.is_finite() {
            return Err(too_large(interval));
        }

        let height = match config.height {
            Some(rows) if rows > MAX_PLOT_HEIGHT => return Err(too_large(rows as f64)),
            Some(rows) => rows.saturating_sub(reserved),
            None if degenerate => 1,
            None => {
                let rows = interval.ceil();
                if rows > MAX_PLOT_HEIGHT as f64 {
                    return Err(too_large(rows));
                }
                (rows as usize).saturating_sub(reserved).max(MIN_PLOT_HEIGHT)
            }
        };
        if height == 0 || (!degenerate && height < MIN_PLOT_HEIGHT) {
            return Err(PlotError::InvalidHeight { height });
        }

        let ratio = if degenerate {
            0.0
        } else {
            interval / (height - 1) as f64
        };
        Ok(Self {
            minimum,
            maximum,
            height,
            ratio,
        })
    }

    /// Row of `v`, 0 being the bottom. Ties round to even.
    ///
    /// May fall outside `0..height` when explicit bounds are narrower than
    /// the data. A degenerate range maps everything to row 0.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn row(&self, v: f64) -> isize {
        if self.ratio == 0.0 {
            return 0;
        }
        ((v - self.minimum) / self.ratio).round_ties_even() as isize
    }

    /// Row where the first sample meets the axis. Truncates toward zero
    /// instead of rounding, so it can sit one row below `row(v)`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn marker_row(&self, v: f64) -> isize {
        if self.ratio == 0.0 {
            return 0;
        }
        ((v - self.minimum) / self.ratio).trunc() as isize
    }

    /// Value printed next to `row`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn label_value(&self, row: usize) -> f64 {
        self.minimum + row as f64 * self.ratio
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn defaults_come_from_the_series() {
        let s = Scale::resolve(&[1.0, 3.0, 10.0, 7.0], &Config::default(), false).unwrap();
        assert_eq!((s.minimum, s.maximum, s.height), (1.0, 10.0, 9));
        assert_approx_eq!(s.ratio, 9.0 / 8.0, 1e-12);
    }

    #[test]
    fn title_row_is_taken_before_ratio() {
        let cfg = Config::builder().height(4).build().unwrap();
        let plain = Scale::resolve(&[1.0, 10.0], &cfg, false).unwrap();
        let titled = Scale::resolve(&[1.0, 10.0], &cfg, true).unwrap();
        assert_eq!(plain.height, 4);
        assert_approx_eq!(plain.ratio, 3.0, 1e-12);
        assert_eq!(titled.height, 3);
        assert_approx_eq!(titled.ratio, 4.5, 1e-12);
    }

    #[test]
    fn inverted_override_is_invalid_range() {
        let cfg = Config {
            minimum: Some(8.0),
            ..Config::default()
        };
        let err = Scale::resolve(&[1.0, 2.0], &cfg, false).unwrap_err();
        assert_eq!(
            err,
            PlotError::InvalidRange {
                minimum: 8.0,
                maximum: 2.0
            }
        );
    }

    #[test]
    fn explicit_height_below_two_is_rejected() {
        let cfg = Config::builder().height(1).build().unwrap();
        assert_eq!(
            Scale::resolve(&[0.0, 5.0], &cfg, false),
            Err(PlotError::InvalidHeight { height: 1 })
        );
        let cfg = Config::builder().height(2).build().unwrap();
        assert_eq!(
            Scale::resolve(&[0.0, 5.0], &cfg, true),
            Err(PlotError::InvalidHeight { height: 1 })
        );
    }

    #[test]
    fn narrow_derived_range_gets_two_rows() {
        let s = Scale::resolve(&[0.0, 0.5], &Config::default(), false).unwrap();
        assert_eq!(s.height, 2);
        assert_approx_eq!(s.ratio, 0.5, 1e-12);
    }

    #[test]
    fn degenerate_range_maps_to_row_zero() {
        let s = Scale::resolve(&[4.0, 4.0, 4.0], &Config::default(), false).unwrap();
        assert_eq!(s.height, 1);
        assert_eq!(s.ratio, 0.0);
        assert_eq!(s.row(4.0), 0);
        assert_eq!(s.row(-100.0), 0);

        let cfg = Config::builder().height(5).build().unwrap();
        let s = Scale::resolve(&[4.0, 4.0], &cfg, false).unwrap();
        assert_eq!(s.height, 5);
        assert_eq!(s.row(4.0), 0);
        assert_eq!(s.label_value(3), 4.0);
    }

    #[test]
    fn rows_round_half_to_even() {
        let cfg = Config::builder().height(5).build().unwrap();
        let s = Scale::resolve(&[0.0, 4.0], &cfg, false).unwrap();
        assert_eq!(s.row(0.5), 0);
        assert_eq!(s.row(1.5), 2);
        assert_eq!(s.row(2.5), 2);
        assert_eq!(s.row(3.5), 4);
        assert_eq!(s.row(2.6), 3);
    }

    #[test]
    fn marker_row_truncates() {
        let cfg = Config::builder().range(1.0..=3.0).height(3).build().unwrap();
        let s = Scale::resolve(&[1.6], &cfg, false).unwrap();
        assert_eq!(s.marker_row(1.6), 0);
        assert_eq!(s.row(1.6), 1);
        assert_eq!(s.marker_row(2.99), 1);
        assert_eq!(s.marker_row(0.5), 0);
    }

    #[test]
    fn huge_spans_are_rejected_not_allocated() {
        assert_eq!(
            Scale::resolve(&[0.0, 1e19], &Config::default(), false),
            Err(PlotError::HeightTooLarge {
                rows: 1e19,
                limit: MAX_PLOT_HEIGHT
            })
        );
        assert!(matches!(
            Scale::resolve(&[-f64::MAX, f64::MAX], &Config::default(), false),
            Err(PlotError::HeightTooLarge { rows, .. }) if rows.is_infinite()
        ));
        let cfg = Config::builder().height(usize::MAX).build().unwrap();
        assert!(matches!(
            Scale::resolve(&[0.0, 1.0], &cfg, false),
            Err(PlotError::HeightTooLarge { .. })
        ));
        // An explicit height keeps a wide span drawable.
        let cfg = Config::builder().height(10).build().unwrap();
        let s = Scale::resolve(&[0.0, 1e19], &cfg, false).unwrap();
        assert_eq!(s.height, 10);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let cfg = Config {
            maximum: Some(f64::INFINITY),
            ..Config::default()
        };
        assert_eq!(
            Scale::resolve(&[0.0, 1.0], &cfg, false),
            Err(PlotError::NonFiniteBound(f64::INFINITY))
        );
        let cfg = Config {
            minimum: Some(f64::NAN),
            ..Config::default()
        };
        assert!(matches!(
            Scale::resolve(&[0.0, 1.0], &cfg, false),
            Err(PlotError::NonFiniteBound(v)) if v.is_nan()
        ));
    }

    #[test]
    fn rows_outside_explicit_bounds_are_not_clamped() {
        let cfg = Config::builder().range(0.0..=3.0).height(4).build().unwrap();
        let s = Scale::resolve(&[-5.0, 10.0], &cfg, false).unwrap();
        assert_eq!(s.row(-5.0), -5);
        assert_eq!(s.row(10.0), 10);
    }
}
