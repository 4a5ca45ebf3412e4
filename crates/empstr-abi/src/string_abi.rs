//! ABI layer for the string functions.
//!
//! Every entry rejects null pointers up front. In-place functions return
//! the pointer they were given (or one into the same string) so C callers
//! can keep chaining.

use std::ptr;

use libc::{c_char, c_int, size_t};

use empstr_core::string;

use crate::util::{c_bytes, c_bytes_mut};

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strlwr(s: *mut c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees a writable NUL-terminated string.
    string::strlwr(unsafe { c_bytes_mut(s) });
    s
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strupr(s: *mut c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees a writable NUL-terminated string.
    string::strupr(unsafe { c_bytes_mut(s) });
    s
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strcapitalize(s: *mut c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees a writable NUL-terminated string.
    string::strcapitalize(unsafe { c_bytes_mut(s) });
    s
}

// ---------------------------------------------------------------------------
// Length and equality
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strlen(s: *const c_char) -> size_t {
    if s.is_null() {
        return 0;
    }
    // SAFETY: non-null; caller guarantees a NUL-terminated string.
    unsafe { c_bytes(s) }.len()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_streql(s1: *const c_char, s2: *const c_char) -> c_int {
    if s1.is_null() || s2.is_null() {
        return 0;
    }
    // SAFETY: both non-null NUL-terminated strings.
    let (a, b) = unsafe { (c_bytes(s1), c_bytes(s2)) };
    c_int::from(string::streq(a, b))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strceql(s1: *const c_char, s2: *const c_char) -> c_int {
    if s1.is_null() || s2.is_null() {
        return 0;
    }
    // SAFETY: both non-null NUL-terminated strings.
    let (a, b) = unsafe { (c_bytes(s1), c_bytes(s2)) };
    c_int::from(string::strceq(a, b))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strneql(s1: *const c_char, s2: *const c_char, n: size_t) -> c_int {
    if n == 0 {
        return 1;
    }
    if s1.is_null() || s2.is_null() {
        return 0;
    }
    // SAFETY: both non-null NUL-terminated strings.
    let (a, b) = unsafe { (c_bytes(s1), c_bytes(s2)) };
    c_int::from(string::strneq(a, b, n))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strcneql(s1: *const c_char, s2: *const c_char, n: size_t) -> c_int {
    if n == 0 {
        return 1;
    }
    if s1.is_null() || s2.is_null() {
        return 0;
    }
    // SAFETY: both non-null NUL-terminated strings.
    let (a, b) = unsafe { (c_bytes(s1), c_bytes(s2)) };
    c_int::from(string::strcneq(a, b, n))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strstr(s: *const c_char, sub: *const c_char) -> *mut c_char {
    if s.is_null() || sub.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: both non-null NUL-terminated strings.
    let (hay, needle) = unsafe { (c_bytes(s), c_bytes(sub)) };
    match string::strstr(hay, needle) {
        // SAFETY: `idx <= strlen(s)`, inside the haystack allocation.
        Some(idx) => unsafe { s.add(idx) as *mut c_char },
        None => ptr::null_mut(),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strcstr(s: *const c_char, sub: *const c_char) -> *mut c_char {
    if s.is_null() || sub.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: both non-null NUL-terminated strings.
    let (hay, needle) = unsafe { (c_bytes(s), c_bytes(sub)) };
    match string::strcstr(hay, needle) {
        // SAFETY: `idx <= strlen(s)`, inside the haystack allocation.
        Some(idx) => unsafe { s.add(idx) as *mut c_char },
        None => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// Stripping
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strlstrip(s: *mut c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees a NUL-terminated string.
    let start = string::lstrip(unsafe { c_bytes(s) });
    // SAFETY: `start <= strlen(s)`.
    unsafe { s.add(start) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strrstrip(s: *mut c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees a writable NUL-terminated string.
    string::rstrip(unsafe { c_bytes_mut(s) });
    s
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strstrip(s: *mut c_char) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees a writable NUL-terminated string.
    let start = string::strip(unsafe { c_bytes_mut(s) });
    // SAFETY: `start <= strlen(s)`.
    unsafe { s.add(start) }
}
