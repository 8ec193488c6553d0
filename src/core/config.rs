//! Run-time configuration object + fluent builder.
//!
//! Every option is optional. Absent options are resolved against the series
//! once, at the start of [`crate::plot`]:
//!
//! | option    | default                                          |
//! |-----------|--------------------------------------------------|
//! | `minimum` | smallest sample                                  |
//! | `maximum` | largest sample                                   |
//! | `height`  | `ceil(maximum - minimum)`, at least 2            |
//! | `width`   | one column per sample plus the axis              |
//! | `format`  | `{:W.2f} `, `W` = integer digits of the max + 3  |
//! | `offset`  | 3                                                |

use crate::core::{constants::DEFAULT_OFFSET, error::PlotError};

/// Immutable chart options handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// Rows of the plot body, title line included when a title is drawn.
    pub height: Option<usize>,
    /// Total rendered columns, axis included.
    pub width: Option<usize>,
    pub format: Option<String>,
    pub offset: Option<usize>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn offset_or_default(&self) -> usize {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    inner: Config,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn minimum(mut self, v: f64) -> Self {
        self.inner.minimum = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn maximum(mut self, v: f64) -> Self {
        self.inner.maximum = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.inner.minimum = Some(*r.start());
        self.inner.maximum = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.inner.height = Some(rows);
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, cols: usize) -> Self {
        self.inner.width = Some(cols);
        self
    }
    #[inline]
    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.inner.format = Some(template.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn offset(mut self, spaces: usize) -> Self {
        self.inner.offset = Some(spaces);
        self
    }

    /// Only the bounds can be checked without seeing the series.
    pub fn build(self) -> Result<Config, PlotError> {
        for bound in [self.inner.minimum, self.inner.maximum].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(PlotError::NonFiniteBound(bound));
            }
        }
        if let (Some(minimum), Some(maximum)) = (self.inner.minimum, self.inner.maximum) {
            if minimum > maximum {
                return Err(PlotError::InvalidRange { minimum, maximum });
            }
        }
        Ok(self.inner)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, PlotError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_every_option() {
        let cfg = Config::builder()
            .range(-1.0..=4.0)
            .height(6)
            .width(40)
            .format("{:6.1f} ")
            .offset(0)
            .build()
            .unwrap();
        assert_eq!(cfg.minimum, Some(-1.0));
        assert_eq!(cfg.maximum, Some(4.0));
        assert_eq!(cfg.height, Some(6));
        assert_eq!(cfg.width, Some(40));
        assert_eq!(cfg.format.as_deref(), Some("{:6.1f} "));
        assert_eq!(cfg.offset_or_default(), 0);
    }

    #[test]
    fn builder_rejects_inverted_bounds() {
        let err = Config::builder().minimum(5.0).maximum(1.0).build().unwrap_err();
        assert_eq!(
            err,
            PlotError::InvalidRange {
                minimum: 5.0,
                maximum: 1.0
            }
        );
    }

    #[test]
    fn builder_rejects_non_finite_bounds() {
        assert_eq!(
            Config::builder().maximum(f64::INFINITY).build(),
            Err(PlotError::NonFiniteBound(f64::INFINITY))
        );
        assert!(matches!(
            Config::builder().minimum(f64::NAN).build(),
            Err(PlotError::NonFiniteBound(v)) if v.is_nan()
        ));
    }

    #[test]
    fn default_config_is_all_absent() {
        let cfg = Config::default();
        assert!(cfg.minimum.is_none() && cfg.height.is_none() && cfg.format.is_none());
        assert_eq!(cfg.offset_or_default(), DEFAULT_OFFSET);
    }
}
