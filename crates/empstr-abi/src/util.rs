//! Shared internal utilities for ABI adapters.

use libc::c_char;

/// Scan a C string and return its byte length before the first NUL.
///
/// # Safety
///
/// `ptr` must be non-null and point to a NUL-terminated string.
pub unsafe fn scan_c_string(ptr: *const c_char) -> usize {
    let mut i = 0usize;
    while unsafe { *ptr.add(i) } != 0 {
        i += 1;
    }
    i
}

/// Borrow a C string as a byte slice (without its NUL).
///
/// # Safety
///
/// Same contract as [`scan_c_string`]; the string must outlive `'a` and not
/// be mutated while borrowed.
pub unsafe fn c_bytes<'a>(ptr: *const c_char) -> &'a [u8] {
    let len = unsafe { scan_c_string(ptr) };
    // SAFETY: `len` bytes were just read successfully from `ptr`.
    unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) }
}

/// Borrow a C string mutably as a byte slice (without its NUL).
///
/// # Safety
///
/// Same contract as [`c_bytes`], plus exclusive access for `'a`.
pub unsafe fn c_bytes_mut<'a>(ptr: *mut c_char) -> &'a mut [u8] {
    let len = unsafe { scan_c_string(ptr) };
    // SAFETY: `len` bytes were just read successfully from `ptr`, and the
    // caller grants exclusive access.
    unsafe { std::slice::from_raw_parts_mut(ptr.cast::<u8>(), len) }
}
