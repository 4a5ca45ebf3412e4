//! Character classification and conversion.
//!
//! ASCII only. Every function is total over `u8`; bytes outside the ASCII
//! alphabetic range are never alphabetic and pass through case mapping
//! unchanged.

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
pub fn is_lower(c: u8) -> bool {
    c.wrapping_sub(b'a') < 26
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
pub fn is_upper(c: u8) -> bool {
    c.wrapping_sub(b'A') < 26
}

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
#[inline]
pub fn is_alpha(c: u8) -> bool {
    is_lower(c) | is_upper(c)
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.wrapping_sub(b'0') < 10
}

/// Returns `true` if `c` is a whitespace character.
///
/// Whitespace here is exactly space, newline and horizontal tab. Carriage
/// return, form feed and vertical tab are not whitespace.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\n' | b'\t')
}

/// Converts `c` to lowercase if it is an uppercase letter.
#[inline]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

/// Converts `c` to uppercase if it is a lowercase letter.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}
