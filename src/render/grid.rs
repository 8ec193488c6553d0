//! Character grid: axis, labels and the line through consecutive samples.
//!
//! Row 0 holds the minimum. Rows are built bottom-up and emitted top-down,
//! so the last row allocated is the first line of text.

use std::cmp::Ordering;

use log::debug;

use crate::{
    core::{
        constants::{
            AXIS_CROSS, AXIS_TICK, DOWN_END, DOWN_START, FLAT, MAX_PLOT_WIDTH, UP_END, UP_START,
            VERTICAL,
        },
        error::PlotError,
    },
    render::{label::AxisLabels, scale::Scale},
};

/// `height` × `width` cells, mutated in place until serialized.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    #[must_use]
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![' '; width]; height],
            width,
        }
    }

    /// Set one cell; rows and columns outside the grid are clipped.
    #[inline]
    fn put(&mut self, row: isize, col: usize, glyph: char) {
        let Ok(row) = usize::try_from(row) else {
            return;
        };
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = glyph;
        }
    }

    fn write_axis(&mut self, axis: &AxisLabels) {
        let axis_col = axis.axis_len - 1;
        for (i, (row, label)) in self.rows.iter_mut().zip(&axis.labels).enumerate() {
            for (cell, c) in row.iter_mut().zip(label.chars()) {
                *cell = c;
            }
            if let Some(cell) = row.get_mut(axis_col) {
                *cell = if i == 0 { AXIS_CROSS } else { AXIS_TICK };
            }
        }
    }

    /// One column of the curve between rows `y0` and `y1`.
    fn segment(&mut self, col: usize, y0: isize, y1: isize) {
        match y0.cmp(&y1) {
            Ordering::Equal => self.put(y0, col, FLAT),
            Ordering::Greater => {
                self.put(y1, col, DOWN_END);
                self.put(y0, col, DOWN_START);
            }
            Ordering::Less => {
                self.put(y1, col, UP_END);
                self.put(y0, col, UP_START);
            }
        }
        for y in y0.min(y1) + 1..y0.max(y1) {
            self.put(y, col, VERTICAL);
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Top row first, newline-joined, no trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.width * 3 + 1));
        for (i, row) in self.rows.iter().rev().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

/// Build the full grid for `series`.
///
/// With an explicit `width`, only the trailing `width - axis_len` samples are
/// drawn and every line is exactly `width` columns.
pub fn rasterize(
    series: &[f64],
    scale: &Scale,
    axis: &AxisLabels,
    width: Option<usize>,
) -> Result<Grid, PlotError> {
    let axis_len = axis.axis_len;
    let (width, visible) = match width {
        Some(w) if w <= axis_len => {
            return Err(PlotError::WidthTooSmall { width: w, axis_len });
        }
        Some(w) if w > MAX_PLOT_WIDTH => {
            return Err(PlotError::WidthTooLarge {
                width: w,
                limit: MAX_PLOT_WIDTH,
            });
        }
        Some(w) => (w, &series[series.len().saturating_sub(w - axis_len)..]),
        None => (series.len() + axis_len, series),
    };
    let Some(&first) = visible.first() else {
        return Err(PlotError::EmptySeries);
    };
    debug!(
        "rasterize: {} of {} samples, {}x{} cells",
        visible.len(),
        series.len(),
        scale.height,
        width
    );

    let mut grid = Grid::blank(scale.height, width);
    grid.write_axis(axis);
    grid.put(scale.marker_row(first), axis_len - 1, AXIS_CROSS);

    for (i, pair) in visible.windows(2).enumerate() {
        grid.segment(i + axis_len, scale.row(pair[0]), scale.row(pair[1]));
    }
    Ok(grid)
}
