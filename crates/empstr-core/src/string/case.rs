//! In-place case conversion: strlwr, strupr, strcapitalize.
//!
//! Only bytes before the terminator are touched. Each function returns the
//! same buffer so calls can be chained.

use super::cmp::strlen;
use crate::ctype::{to_lower, to_upper};

/// Converts every uppercase letter of `s` to lowercase, in place.
pub fn strlwr(s: &mut [u8]) -> &mut [u8] {
    let len = strlen(s);
    for b in &mut s[..len] {
        *b = to_lower(*b);
    }
    s
}

/// Converts every lowercase letter of `s` to uppercase, in place.
pub fn strupr(s: &mut [u8]) -> &mut [u8] {
    let len = strlen(s);
    for b in &mut s[..len] {
        *b = to_upper(*b);
    }
    s
}

/// Uppercases the first byte and lowercases the rest (`heLlo` -> `Hello`).
///
/// An empty string is left untouched.
pub fn strcapitalize(s: &mut [u8]) -> &mut [u8] {
    if strlen(s) == 0 {
        return s;
    }
    s[0] = to_upper(s[0]);
    strlwr(&mut s[1..]);
    s
}
