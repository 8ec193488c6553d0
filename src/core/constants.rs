//! A collection of constants.

/// Axis baseline, also marks where the first sample meets the axis.
pub const AXIS_CROSS: char = '┼';
/// Axis tick on every row but the bottom one.
pub const AXIS_TICK: char = '┤';
/// Flat segment.
pub const FLAT: char = '─';
/// Vertical run between two corners.
pub const VERTICAL: char = '│';
/// Lower corner of a descending step.
pub const DOWN_END: char = '╰';
/// Upper corner of a descending step.
pub const DOWN_START: char = '╮';
/// Upper corner of an ascending step.
pub const UP_END: char = '╭';
/// Lower corner of an ascending step.
pub const UP_START: char = '╯';

/// Every glyph the rasterizer may emit besides labels and spaces.
pub const GLYPHS: [char; 8] = [
    AXIS_CROSS, AXIS_TICK, FLAT, VERTICAL, DOWN_END, DOWN_START, UP_END, UP_START,
];

/// Spaces in front of every label unless overridden.
pub const DEFAULT_OFFSET: usize = 3;

/// Labels show two decimals.
///
/// 14.832 becomes 14.83
pub const DECIMAL_PRECISION: usize = 2;

/// The value-to-row mapping divides by `height - 1`.
pub const MIN_PLOT_HEIGHT: usize = 2;
/// Upper bound on body rows, derived or requested.
pub const MAX_PLOT_HEIGHT: usize = 10_000;
/// Upper bound on an explicit total width.
pub const MAX_PLOT_WIDTH: usize = 100_000;
