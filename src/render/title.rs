//! Title line centred over the data region of a rendered grid.

use crate::core::constants::{AXIS_CROSS, AXIS_TICK};

/// Prepend `title` to `plot`, centred over the columns right of the axis.
///
/// A title wider than the data region starts one column after the axis and
/// may run past the grid.
#[must_use]
pub fn overlay(plot: &str, title: &str) -> String {
    let first_line = plot.split('\n').next().unwrap_or_default();
    let axis_col = plot
        .chars()
        .position(|c| c == AXIS_CROSS || c == AXIS_TICK)
        .unwrap_or(0);
    let plot_width = first_line.chars().count().saturating_sub(axis_col);
    let gap = (plot_width.saturating_sub(title.chars().count()) / 2).max(1);
    format!("{}{title}\n{plot}", " ".repeat(axis_col + gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_over_data_region() {
        let plot = "   10.00 ┤ ╭╮ \n    1.00 ┼─╯  ";
        let out = overlay(plot, "X");
        let first = out.lines().next().unwrap();
        assert_eq!(first, "           X");
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn long_title_starts_after_axis() {
        let plot = "  1.00 ┼──";
        let out = overlay(plot, "a long title");
        assert_eq!(out.lines().next().unwrap(), "        a long title");
    }
}
