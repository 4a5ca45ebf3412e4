//! ABI layer for character classification and conversion.
//!
//! Pure compute: no pointers. Each function reinterprets the C `char` as a
//! byte and delegates to `empstr_core::ctype`.

use libc::{c_char, c_int};

use empstr_core::ctype;

#[inline]
fn classify(ch: c_char, f: fn(u8) -> bool) -> c_int {
    c_int::from(f(ch as u8))
}

#[inline]
fn convert(ch: c_char, f: fn(u8) -> u8) -> c_char {
    f(ch as u8) as c_char
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_islwr(ch: c_char) -> c_int {
    classify(ch, ctype::is_lower)
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_isupr(ch: c_char) -> c_int {
    classify(ch, ctype::is_upper)
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_isalpha(ch: c_char) -> c_int {
    classify(ch, ctype::is_alpha)
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_isnum(ch: c_char) -> c_int {
    classify(ch, ctype::is_digit)
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_isspace(ch: c_char) -> c_int {
    classify(ch, ctype::is_space)
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_tolwr(ch: c_char) -> c_char {
    convert(ch, ctype::to_lower)
}

#[unsafe(no_mangle)]
pub extern "C" fn EMP_toupr(ch: c_char) -> c_char {
    convert(ch, ctype::to_upper)
}
