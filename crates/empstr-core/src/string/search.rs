//! Substring search: strstr, strcstr.
//!
//! Naive scan: at every haystack position whose first byte matches the
//! needle's first byte, attempt a bounded comparison over the full needle
//! length. Worst case is `O(len(haystack) * len(needle))`.

use super::cmp::{identity, neq_by, strlen};
use crate::ctype::to_lower;

fn find_by(haystack: &[u8], needle: &[u8], fold: fn(u8) -> u8) -> Option<usize> {
    let h_len = strlen(haystack);
    let n_len = strlen(needle);

    if n_len == 0 {
        return Some(0);
    }
    if n_len > h_len {
        return None;
    }

    let first = fold(needle[0]);
    (0..=h_len - n_len).find(|&i| {
        fold(haystack[i]) == first && neq_by(&haystack[i..h_len], needle, n_len, fold)
    })
}

/// Finds the first occurrence of the NUL-terminated `needle` in the
/// NUL-terminated `haystack`.
///
/// Returns the byte index where `needle` starts, or `None` if not found.
/// An empty needle matches at index 0.
pub fn strstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    find_by(haystack, needle, identity)
}

/// Case-insensitive [`strstr`]. The first byte is folded like every other.
pub fn strcstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    find_by(haystack, needle, to_lower)
}
