//! Terminal size plumbing + centering.

use terminal_size::{Height, Width, terminal_size};
use unicode_width::UnicodeWidthStr;

use crate::core::constants::{FALLBACK_COLUMNS, FALLBACK_ROWS};

/// Current terminal geometry (80×24 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(FALLBACK_COLUMNS), Height(FALLBACK_ROWS)))
}

/// Display width of `s` in terminal columns. SGR escapes (`ESC[...m`) take
/// no space; CJK and emoji take two.
#[must_use]
pub fn text_width(s: &str) -> usize {
    let mut n = 0;
    let mut rest = s;
    while let Some(esc) = rest.find('\x1b') {
        n += rest[..esc].width();
        let tail = &rest[esc..];
        rest = match tail.find('m') {
            Some(end) => &tail[end + 1..],
            None => "",
        };
    }
    n + rest.width()
}

/// Left padding that centres `width` columns on a `columns`-wide terminal.
/// Wider content gets no padding and is never cut.
#[inline]
#[must_use]
pub fn center_pad(width: usize, columns: usize) -> usize {
    columns.saturating_sub(width) / 2
}
