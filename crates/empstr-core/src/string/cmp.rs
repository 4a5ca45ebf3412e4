//! Length and equality: strlen, streq, strceq, strneq, strcneq.
//!
//! Strings are `&[u8]` slices where a NUL byte (`0x00`) marks the logical
//! end. Reads past the end of a slice observe NUL, so an unterminated slice
//! behaves as if it were terminated right after its last byte.

use crate::ctype::to_lower;
use crate::error::InputError;

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Scans `s` for the first `0x00` byte and returns its index. If no NUL is
/// found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Returns the length of `s`, requiring an actual NUL terminator.
///
/// Use this where an unterminated buffer is a caller bug that must be
/// surfaced instead of silently bounded by the slice.
pub fn terminated(s: &[u8]) -> Result<usize, InputError> {
    s.iter()
        .position(|&b| b == 0)
        .ok_or(InputError::Unterminated)
}

#[inline]
pub(crate) fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

#[inline]
pub(crate) fn identity(c: u8) -> u8 {
    c
}

fn eq_by(s1: &[u8], s2: &[u8], fold: fn(u8) -> u8) -> bool {
    let mut i = 0;
    loop {
        let a = byte_at(s1, i);
        let b = byte_at(s2, i);
        if fold(a) != fold(b) {
            return false;
        }
        if a == 0 {
            return true;
        }
        i += 1;
    }
}

/// Bounded comparison: true iff `n` bytes of `s1` match `s2` before `s1` ends.
pub(crate) fn neq_by(s1: &[u8], s2: &[u8], n: usize, fold: fn(u8) -> u8) -> bool {
    for i in 0..n {
        let a = byte_at(s1, i);
        if a == 0 || fold(a) != fold(byte_at(s2, i)) {
            return false;
        }
    }
    true
}

/// Returns true if both strings hold the same bytes up to their terminators.
pub fn streq(s1: &[u8], s2: &[u8]) -> bool {
    eq_by(s1, s2, identity)
}

/// Like [`streq`], but ASCII letters compare case-insensitively.
///
/// Both operands are folded with [`to_lower`]; bytes outside `[A-Za-z]`
/// compare by raw value.
pub fn strceq(s1: &[u8], s2: &[u8]) -> bool {
    eq_by(s1, s2, to_lower)
}

/// Returns true if the first `n` bytes of `s1` and `s2` are equal.
///
/// Reaching the end of `s1` before `n` bytes were matched is a mismatch,
/// even when `s2` ends at the same point. `n == 0` is always true.
pub fn strneq(s1: &[u8], s2: &[u8], n: usize) -> bool {
    neq_by(s1, s2, n, identity)
}

/// Case-insensitive [`strneq`].
pub fn strcneq(s1: &[u8], s2: &[u8], n: usize) -> bool {
    neq_by(s1, s2, n, to_lower)
}
