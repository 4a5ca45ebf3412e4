//! Integration tests for the EMP_* C boundary.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use empstr_abi::stdlib_abi::{
    EMP_stod, EMP_stol, EMP_stol_clamped, EMP_strtod, EMP_strtol, EMP_strtol_clamped,
};
use empstr_abi::string_abi::{
    EMP_strcapitalize, EMP_strceql, EMP_strcneql, EMP_strcstr, EMP_streql, EMP_strlen,
    EMP_strlstrip, EMP_strlwr, EMP_strneql, EMP_strrstrip, EMP_strstr, EMP_strstrip, EMP_strupr,
};

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

fn buf(s: &str) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

unsafe fn read(p: *const c_char) -> String {
    unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_owned()
}

#[test]
fn strlen_and_null() {
    let s = c("hello");
    unsafe {
        assert_eq!(EMP_strlen(s.as_ptr()), 5);
        assert_eq!(EMP_strlen(c("").as_ptr()), 0);
        assert_eq!(EMP_strlen(ptr::null()), 0);
    }
}

#[test]
fn equality_family() {
    let (hello, upper, help) = (c("Hello"), c("HELLO"), c("help"));
    unsafe {
        assert_eq!(EMP_streql(hello.as_ptr(), hello.as_ptr()), 1);
        assert_eq!(EMP_streql(hello.as_ptr(), upper.as_ptr()), 0);
        assert_eq!(EMP_strceql(hello.as_ptr(), upper.as_ptr()), 1);
        assert_eq!(EMP_strneql(hello.as_ptr(), help.as_ptr(), 3), 0);
        assert_eq!(EMP_strcneql(hello.as_ptr(), help.as_ptr(), 3), 1);
        assert_eq!(EMP_strneql(hello.as_ptr(), help.as_ptr(), 0), 1);
        assert_eq!(EMP_streql(ptr::null(), hello.as_ptr()), 0);
        assert_eq!(EMP_strceql(hello.as_ptr(), ptr::null()), 0);
    }
}

#[test]
fn search_returns_pointer_into_haystack() {
    let hay = c("hello world");
    let (world, xyz, empty, upper) = (c("world"), c("xyz"), c(""), c("WORLD"));
    unsafe {
        let hit = EMP_strstr(hay.as_ptr(), world.as_ptr());
        assert_eq!(hit.offset_from(hay.as_ptr()), 6);
        assert!(EMP_strstr(hay.as_ptr(), xyz.as_ptr()).is_null());
        assert_eq!(EMP_strstr(hay.as_ptr(), empty.as_ptr()).cast_const(), hay.as_ptr());
        assert!(EMP_strstr(hay.as_ptr(), upper.as_ptr()).is_null());

        let hit = EMP_strcstr(hay.as_ptr(), upper.as_ptr());
        assert_eq!(hit.offset_from(hay.as_ptr()), 6);
        assert!(EMP_strcstr(ptr::null(), upper.as_ptr()).is_null());
    }
}

#[test]
fn case_conversion_in_place() {
    let mut s = buf("heLlo World");
    unsafe {
        let p = s.as_mut_ptr().cast::<c_char>();
        assert_eq!(EMP_strupr(p), p);
        assert_eq!(read(p), "HELLO WORLD");
        EMP_strlwr(p);
        assert_eq!(read(p), "hello world");
        EMP_strcapitalize(p);
        assert_eq!(read(p), "Hello world");

        let mut empty = buf("");
        let e = empty.as_mut_ptr().cast::<c_char>();
        assert_eq!(EMP_strcapitalize(e), e);
        assert_eq!(empty, vec![0]);

        assert!(EMP_strupr(ptr::null_mut()).is_null());
    }
}

#[test]
fn stripping() {
    let mut s = buf("  hi  ");
    unsafe {
        let p = s.as_mut_ptr().cast::<c_char>();
        let start = EMP_strstrip(p);
        assert_eq!(start.offset_from(p), 2);
        assert_eq!(read(start), "hi");

        let mut r = buf("abc \t\n");
        let rp = r.as_mut_ptr().cast::<c_char>();
        assert_eq!(EMP_strrstrip(rp), rp);
        assert_eq!(read(rp), "abc");

        let mut blank = buf("   ");
        let bp = blank.as_mut_ptr().cast::<c_char>();
        EMP_strrstrip(bp);
        assert_eq!(read(bp), "");

        let l = c("\t x");
        assert_eq!(read(EMP_strlstrip(l.as_ptr() as *mut c_char)), "x");
    }
}

#[test]
fn numeric_lenient() {
    unsafe {
        assert_eq!(EMP_stol(c("  -42abc").as_ptr()), -42);
        assert_eq!(EMP_stol(c("abc").as_ptr()), 0);
        assert_eq!(EMP_stol(c("+7").as_ptr()), 7);
        assert_eq!(EMP_stol(c("9223372036854775808").as_ptr()), i64::MIN);
        assert_eq!(EMP_stol(ptr::null()), 0);

        assert_eq!(EMP_stod(c("-0.5").as_ptr()), -0.5);
        assert_eq!(EMP_stod(c("5").as_ptr()), 5.0);
        assert_eq!(EMP_stod(ptr::null()), 0.0);
    }
}

#[test]
fn stol_ignores_environment() {
    // SAFETY: no other test in this binary reads the environment.
    unsafe { std::env::set_var("EMPSTR_PARSE_MODE", "strict") };
    let big = c("9223372036854775808");
    let mut end: *mut c_char = ptr::null_mut();
    unsafe {
        assert_eq!(EMP_stol(big.as_ptr()), i64::MIN);
        assert_eq!(EMP_strtol(big.as_ptr(), &mut end), i64::MIN);
        assert_eq!(end.cast_const().offset_from(big.as_ptr()), 19);
    }
    unsafe { std::env::remove_var("EMPSTR_PARSE_MODE") };
}

#[test]
fn clamped_entries_saturate() {
    let big = c("9223372036854775808");
    let small = c("-9223372036854775809 tail");
    unsafe {
        assert_eq!(EMP_stol_clamped(big.as_ptr()), i64::MAX);
        assert_eq!(EMP_stol_clamped(small.as_ptr()), i64::MIN);
        assert_eq!(EMP_stol_clamped(c("12").as_ptr()), 12);
        assert_eq!(EMP_stol_clamped(ptr::null()), 0);

        let mut end: *mut c_char = ptr::null_mut();
        assert_eq!(EMP_strtol_clamped(small.as_ptr(), &mut end), i64::MIN);
        assert_eq!(end.cast_const().offset_from(small.as_ptr()), 20);
    }
}

#[test]
fn endptr_reports_consumed_input() {
    let s = c("  -42abc");
    let f = c("3.25 rest");
    let none = c("xyz");
    unsafe {
        let mut end: *mut c_char = ptr::null_mut();
        assert_eq!(EMP_strtol(s.as_ptr(), &mut end), -42);
        assert_eq!(end.cast_const().offset_from(s.as_ptr()), 5);

        assert_eq!(EMP_strtod(f.as_ptr(), &mut end), 3.25);
        assert_eq!(end.cast_const().offset_from(f.as_ptr()), 4);

        assert_eq!(EMP_strtol(none.as_ptr(), &mut end), 0);
        assert_eq!(end.cast_const(), none.as_ptr());

        assert_eq!(EMP_strtol(s.as_ptr(), ptr::null_mut()), -42);
    }
}
