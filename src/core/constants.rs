//! A collection of constants.

/// Columns assumed when stdout is not a terminal
pub const FALLBACK_TERMINAL_COLUMNS: usize = 80;

/// Sits between the label column and the rest of the row
pub const LABEL_SEPARATOR: &str = ": ";
/// One space between the numeric annotation and the bar
pub const NUMERIC_GUTTER: usize = 1;
/// The left and right boundary pipes
pub const BORDER_WIDTH: usize = 2;

/// Bar field must hold the terminator plus at least one fill cell
pub const MIN_BAR_WIDTH: usize = 2;
/// Widest bar field accepted from `--width`
pub const MAX_BAR_WIDTH: usize = u16::MAX as usize;

/// Glyph closing both sides of every bar field
pub const BOUNDARY_GLYPH: char = '|';
/// Leading edge of the arrow styles
pub const ARROW_HEAD: char = '>';

/// Local date-time layout used for `--timestamp` labels
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
