//! Whitespace stripping: lstrip, rstrip, strip.
//!
//! Whitespace is the narrow EMP set (space, newline, tab); see
//! [`crate::ctype::is_space`].

use super::cmp::strlen;
use crate::ctype::is_space;

/// Returns the index of the first non-whitespace byte of `s`.
///
/// For an empty or all-whitespace string this is the index of the
/// terminator (the string length). `s` is not modified.
pub fn lstrip(s: &[u8]) -> usize {
    let len = strlen(s);
    s[..len].iter().position(|&b| !is_space(b)).unwrap_or(len)
}

/// Moves the terminator right after the last non-whitespace byte of `s`.
///
/// Returns the new string length. A NUL is written only when trailing
/// whitespace was present, so the write always lands inside the old
/// string. Empty and all-whitespace strings end up with length 0.
pub fn rstrip(s: &mut [u8]) -> usize {
    let len = strlen(s);
    let end = s[..len]
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |i| i + 1);
    if end < len {
        s[end] = 0;
    }
    end
}

/// Strips both ends: right first, then left.
///
/// Returns the index of the first visible byte; the trimmed string runs
/// from there to the new terminator.
pub fn strip(s: &mut [u8]) -> usize {
    rstrip(s);
    lstrip(s)
}
