//! ABI layer for numeric parsing.
//!
//! `EMP_stol`/`EMP_strtol` wrap on overflow like the C library they replace.
//! `EMP_stol_clamped`/`EMP_strtol_clamped` saturate to `LONG_MIN`/`LONG_MAX`
//! instead.

use libc::{c_char, c_double, c_long};

use empstr_core::stdlib;

use crate::util::c_bytes;

/// Store `nptr + consumed` into `endptr` when the caller asked for it.
///
/// # Safety
///
/// `endptr` is null or valid for a pointer write; `consumed <= strlen(nptr)`.
unsafe fn store_end(endptr: *mut *mut c_char, nptr: *const c_char, consumed: usize) {
    if !endptr.is_null() {
        unsafe { *endptr = nptr.add(consumed) as *mut c_char };
    }
}

/// Shared body of the integer entries.
///
/// # Safety
///
/// `nptr` is null or a NUL-terminated string; `endptr` as for [`store_end`].
unsafe fn parse_long(
    nptr: *const c_char,
    endptr: *mut *mut c_char,
    parse: fn(&[u8]) -> (i64, usize),
) -> c_long {
    if nptr.is_null() {
        return 0;
    }
    // SAFETY: non-null; caller guarantees a NUL-terminated string.
    let (val, consumed) = parse(unsafe { c_bytes(nptr) });
    // SAFETY: `consumed` never exceeds the scanned length.
    unsafe { store_end(endptr, nptr, consumed) };
    val as c_long
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_stol(nptr: *const c_char) -> c_long {
    unsafe { parse_long(nptr, std::ptr::null_mut(), stdlib::strtol) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strtol(nptr: *const c_char, endptr: *mut *mut c_char) -> c_long {
    unsafe { parse_long(nptr, endptr, stdlib::strtol) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_stol_clamped(nptr: *const c_char) -> c_long {
    unsafe { parse_long(nptr, std::ptr::null_mut(), stdlib::strtol_clamped) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strtol_clamped(
    nptr: *const c_char,
    endptr: *mut *mut c_char,
) -> c_long {
    unsafe { parse_long(nptr, endptr, stdlib::strtol_clamped) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_stod(nptr: *const c_char) -> c_double {
    if nptr.is_null() {
        return 0.0;
    }
    // SAFETY: non-null; caller guarantees a NUL-terminated string.
    stdlib::stod(unsafe { c_bytes(nptr) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn EMP_strtod(nptr: *const c_char, endptr: *mut *mut c_char) -> c_double {
    if nptr.is_null() {
        return 0.0;
    }
    // SAFETY: non-null; caller guarantees a NUL-terminated string.
    let (val, consumed) = stdlib::strtod(unsafe { c_bytes(nptr) });
    // SAFETY: `consumed` never exceeds the scanned length.
    unsafe { store_end(endptr, nptr, consumed) };
    val
}
