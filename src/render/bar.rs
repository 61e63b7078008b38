//! Glyph composition for a single row.

use std::iter::repeat_n;

use unicode_width::UnicodeWidthStr;

use crate::core::style::BarStyle;

/// Append `|<fill><terminator><padding>|`. The part between the two pipes
/// is always exactly `field` chars wide.
#[inline]
pub fn push_bar(buf: &mut String, style: BarStyle, cells: usize, field: usize) {
    let cells = cells.min(field.saturating_sub(1));
    buf.push(style.boundary());
    buf.extend(repeat_n(style.fill(), cells));
    buf.push(style.terminator());
    buf.extend(repeat_n(' ', field.saturating_sub(cells + 1)));
    buf.push(style.boundary());
}

/// Left-pad `text` with spaces to `width` terminal cells.
#[inline]
pub fn push_right_aligned(buf: &mut String, text: &str, width: usize) {
    buf.extend(repeat_n(' ', width.saturating_sub(text.width())));
    buf.push_str(text);
}
