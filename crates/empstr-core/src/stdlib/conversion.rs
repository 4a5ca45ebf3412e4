//! Numeric conversion functions (stol, stod, strtol, strtod).
//!
//! Decimal only, no exponent notation. Parsing skips leading whitespace,
//! accepts one optional `+`/`-`, then consumes a maximal run of digits
//! (and for floats an optional `.` followed by more digits). Anything after
//! that is ignored.
//!
//! Three tiers share one scanner per type:
//! - [`stol`] / [`stod`]: lenient, value only. No digits yields zero and
//!   integer overflow wraps.
//! - [`strtol`] / [`strtod`]: lenient, value plus consumed byte count.
//! - [`stol_checked`] / [`stod_checked`]: missing digits and overflow are
//!   errors.

use crate::ctype::is_digit;
use crate::error::ParseError;
use crate::string::{lstrip, strlen};

/// Result of a string-to-number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    NoDigits,
    Overflow,
    Underflow,
}

/// A successfully parsed value and the number of input bytes it spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    /// Index one past the last byte of the number. Includes any leading
    /// whitespace and sign.
    pub consumed: usize,
}

// ----------------------------------------------------------------------------
// Integers
// ----------------------------------------------------------------------------

pub fn stol(s: &[u8]) -> i64 {
    let (val, _, _) = strtol_impl(s);
    val
}

pub fn strtol(s: &[u8]) -> (i64, usize) {
    let (val, len, _) = strtol_impl(s);
    (val, len)
}

/// Helper for strtol: returns (value, consumed_bytes, status).
///
/// The value is accumulated with wrapping `i64` arithmetic, so on overflow
/// it is the wrapped result and the status tells the caller it wrapped.
/// With no digits the result is `(0, 0, NoDigits)`.
pub fn strtol_impl(s: &[u8]) -> (i64, usize, ConversionStatus) {
    let s = &s[..strlen(s)];
    let mut i = lstrip(s);

    let negative = match s.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let limit = if negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };

    let digits_start = i;
    let mut acc: i64 = 0;
    // Exact magnitude for range checks; `None` once it no longer fits u64.
    let mut magnitude: Option<u64> = Some(0);

    while let Some(&c) = s.get(i) {
        if !is_digit(c) {
            break;
        }
        let digit = c - b'0';
        acc = acc.wrapping_mul(10).wrapping_add(i64::from(digit));
        magnitude = magnitude
            .and_then(|m| m.checked_mul(10))
            .and_then(|m| m.checked_add(u64::from(digit)));
        i += 1;
    }

    if i == digits_start {
        return (0, 0, ConversionStatus::NoDigits);
    }

    let val = if negative { acc.wrapping_neg() } else { acc };
    let status = match magnitude {
        Some(m) if m <= limit => ConversionStatus::Success,
        _ if negative => ConversionStatus::Underflow,
        _ => ConversionStatus::Overflow,
    };

    (val, i, status)
}

/// Like [`strtol`], but out-of-range input clamps to `i64::MIN`/`i64::MAX`
/// instead of wrapping.
pub fn strtol_clamped(s: &[u8]) -> (i64, usize) {
    match strtol_impl(s) {
        (_, len, ConversionStatus::Overflow) => (i64::MAX, len),
        (_, len, ConversionStatus::Underflow) => (i64::MIN, len),
        (val, len, _) => (val, len),
    }
}

pub fn stol_checked(s: &[u8]) -> Result<Parsed<i64>, ParseError> {
    let (value, consumed, status) = strtol_impl(s);
    checked(value, consumed, status)
}

// ----------------------------------------------------------------------------
// Floating point
// ----------------------------------------------------------------------------

pub fn stod(s: &[u8]) -> f64 {
    let (val, _, _) = strtod_impl(s);
    val
}

pub fn strtod(s: &[u8]) -> (f64, usize) {
    let (val, len, _) = strtod_impl(s);
    (val, len)
}

/// Helper for strtod: returns (value, consumed_bytes, status).
///
/// Integer and fraction digits accumulate into a single `f64`; each
/// fraction digit also multiplies a scale by ten. The result is
/// `accumulated / scale` times the sign, which defaults to positive.
/// A non-finite result is reported as `Overflow`/`Underflow` by sign.
pub fn strtod_impl(s: &[u8]) -> (f64, usize, ConversionStatus) {
    let s = &s[..strlen(s)];
    let mut i = lstrip(s);

    let sign = match s.get(i) {
        Some(b'-') => {
            i += 1;
            -1.0
        }
        Some(b'+') => {
            i += 1;
            1.0
        }
        _ => 1.0,
    };

    let mut num = 0.0f64;
    let mut scale = 1.0f64;
    let mut any_digits = false;

    while let Some(&c) = s.get(i) {
        if !is_digit(c) {
            break;
        }
        num = num * 10.0 + f64::from(c - b'0');
        any_digits = true;
        i += 1;
    }

    if s.get(i) == Some(&b'.') {
        i += 1;
        while let Some(&c) = s.get(i) {
            if !is_digit(c) {
                break;
            }
            num = num * 10.0 + f64::from(c - b'0');
            scale *= 10.0;
            any_digits = true;
            i += 1;
        }
    }

    if !any_digits {
        return (0.0, 0, ConversionStatus::NoDigits);
    }

    let val = num / scale * sign;
    let status = if val.is_finite() {
        ConversionStatus::Success
    } else if sign < 0.0 {
        ConversionStatus::Underflow
    } else {
        ConversionStatus::Overflow
    };

    (val, i, status)
}

pub fn stod_checked(s: &[u8]) -> Result<Parsed<f64>, ParseError> {
    let (value, consumed, status) = strtod_impl(s);
    checked(value, consumed, status)
}

fn checked<T>(
    value: T,
    consumed: usize,
    status: ConversionStatus,
) -> Result<Parsed<T>, ParseError> {
    match status {
        ConversionStatus::Success => Ok(Parsed { value, consumed }),
        ConversionStatus::NoDigits => Err(ParseError::NoDigits),
        ConversionStatus::Overflow => Err(ParseError::Overflow { consumed }),
        ConversionStatus::Underflow => Err(ParseError::Underflow { consumed }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= f64::EPSILON * b.abs().max(1.0)
    }

    #[test]
    fn test_stol_basic() {
        assert_eq!(stol(b"42\0"), 42);
        assert_eq!(stol(b"-42\0"), -42);
        assert_eq!(stol(b"+7\0"), 7);
        assert_eq!(stol(b"   123\0"), 123);
        assert_eq!(stol(b"0\0"), 0);
        assert_eq!(stol(b"007\0"), 7);
    }

    #[test]
    fn test_stol_stops_at_first_non_digit() {
        assert_eq!(stol(b"  -42abc\0"), -42);
        assert_eq!(stol(b"12 34\0"), 12);
        assert_eq!(stol(b"9.99\0"), 9);
        assert_eq!(stol(b"5\09\0"), 5);
    }

    #[test]
    fn test_stol_no_digits() {
        assert_eq!(stol(b"abc\0"), 0);
        assert_eq!(stol(b"\0"), 0);
        assert_eq!(stol(b""), 0);
        assert_eq!(stol(b"-\0"), 0);
        assert_eq!(stol(b"+\0"), 0);
        assert_eq!(stol(b"   \0"), 0);
        assert_eq!(stol(b"--5\0"), 0);
        assert_eq!(stol(b"- 5\0"), 0);
    }

    #[test]
    fn test_stol_whitespace_set() {
        assert_eq!(stol(b"\t\n 8\0"), 8);
        // Carriage return is not whitespace, so nothing is parsed.
        assert_eq!(stol(b"\r8\0"), 0);
    }

    #[test]
    fn test_strtol_consumed() {
        assert_eq!(strtol(b"123456\0"), (123456, 6));
        assert_eq!(strtol(b"  -42abc\0"), (-42, 5));
        assert_eq!(strtol(b"+0\0"), (0, 2));
        assert_eq!(strtol(b"abc\0"), (0, 0));
        assert_eq!(strtol(b"  -\0"), (0, 0));
    }

    #[test]
    fn test_strtol_limits() {
        let max = i64::MAX;
        let s = format!("{max}");
        let (val, len, status) = strtol_impl(s.as_bytes());
        assert_eq!(val, max);
        assert_eq!(len, s.len());
        assert_eq!(status, ConversionStatus::Success);

        let min = i64::MIN;
        let s = format!("{min}");
        let (val, _, status) = strtol_impl(s.as_bytes());
        assert_eq!(val, min);
        assert_eq!(status, ConversionStatus::Success);
    }

    #[test]
    fn test_strtol_overflow_wraps() {
        let s_over = "9223372036854775808"; // MAX + 1
        let (val, len, status) = strtol_impl(s_over.as_bytes());
        assert_eq!(val, i64::MIN);
        assert_eq!(len, s_over.len());
        assert_eq!(status, ConversionStatus::Overflow);

        let s_under = "-9223372036854775809"; // MIN - 1
        let (val, _, status) = strtol_impl(s_under.as_bytes());
        assert_eq!(val, i64::MAX);
        assert_eq!(status, ConversionStatus::Underflow);
    }

    #[test]
    fn test_strtol_huge_magnitude() {
        let huge = "123456789012345678901234567890";
        let (_, len, status) = strtol_impl(huge.as_bytes());
        assert_eq!(len, huge.len());
        assert_eq!(status, ConversionStatus::Overflow);
    }

    #[test]
    fn test_strtol_clamped() {
        assert_eq!(strtol_clamped(b"99999999999999999999\0"), (i64::MAX, 20));
        assert_eq!(strtol_clamped(b"-99999999999999999999\0"), (i64::MIN, 21));
        assert_eq!(strtol_clamped(b"17\0"), (17, 2));
        assert_eq!(strtol_clamped(b"x\0"), (0, 0));
    }

    #[test]
    fn test_stol_checked() {
        assert_eq!(
            stol_checked(b" -12x\0"),
            Ok(Parsed {
                value: -12,
                consumed: 4
            })
        );
        assert_eq!(stol_checked(b"abc\0"), Err(ParseError::NoDigits));
        assert_eq!(stol_checked(b"+\0"), Err(ParseError::NoDigits));
        assert_eq!(
            stol_checked(b"9223372036854775808\0"),
            Err(ParseError::Overflow { consumed: 19 })
        );
        assert_eq!(
            stol_checked(b"-9223372036854775809\0"),
            Err(ParseError::Underflow { consumed: 20 })
        );
    }

    #[test]
    fn test_checked_distinguishes_zero_from_nothing() {
        assert_eq!(stol(b"0\0"), stol(b"zero\0"));
        assert!(stol_checked(b"0\0").is_ok());
        assert!(stol_checked(b"zero\0").is_err());
    }

    #[test]
    fn test_stol_render_round_trip() {
        for n in [0i64, 1, 9, 10, 99, 12345, 1 << 40, i64::MAX] {
            assert_eq!(stol(n.to_string().as_bytes()), n);
        }
        for n in [-1i64, -10, -987654321, i64::MIN] {
            assert_eq!(stol(n.to_string().as_bytes()), n);
        }
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_stod_basic() {
        assert!(approx(stod(b"3.14\0"), 3.14));
        assert_eq!(stod(b"-0.5\0"), -0.5);
        assert_eq!(stod(b"5\0"), 5.0);
        assert_eq!(stod(b"+2.25\0"), 2.25);
        assert_eq!(stod(b"  \t10.0\0"), 10.0);
    }

    #[test]
    fn test_stod_unsigned_defaults_positive() {
        assert!(stod(b"1.5\0") > 0.0);
        assert_eq!(stod(b"0.25\0"), 0.25);
    }

    #[test]
    fn test_stod_partial_forms() {
        assert_eq!(strtod(b"5.\0"), (5.0, 2));
        assert_eq!(strtod(b".5\0"), (0.5, 2));
        assert_eq!(strtod(b"-.25x\0"), (-0.25, 4));
        assert_eq!(strtod(b"1.2.3\0"), (1.2, 3));
        assert_eq!(strtod(b"7e3\0"), (7.0, 1));
    }

    #[test]
    fn test_stod_no_digits() {
        assert_eq!(strtod(b"\0"), (0.0, 0));
        assert_eq!(strtod(b".\0"), (0.0, 0));
        assert_eq!(strtod(b"-.\0"), (0.0, 0));
        assert_eq!(strtod(b"abc\0"), (0.0, 0));
        assert_eq!(strtod(b"nan\0"), (0.0, 0));
    }

    #[test]
    fn test_stod_checked() {
        let parsed = stod_checked(b"  -1.5kg\0").unwrap();
        assert_eq!(parsed.value, -1.5);
        assert_eq!(parsed.consumed, 6);
        assert_eq!(stod_checked(b".\0"), Err(ParseError::NoDigits));
    }

    #[test]
    fn test_stod_overflow_status() {
        let big = "9".repeat(400);
        let (val, len, status) = strtod_impl(big.as_bytes());
        assert!(val.is_infinite());
        assert_eq!(len, 400);
        assert_eq!(status, ConversionStatus::Overflow);

        let neg = format!("-{big}");
        let (_, _, status) = strtod_impl(neg.as_bytes());
        assert_eq!(status, ConversionStatus::Underflow);
        assert_eq!(
            stod_checked(neg.as_bytes()),
            Err(ParseError::Underflow { consumed: 401 })
        );
    }

    #[test]
    fn test_stod_integer_agrees_with_stol() {
        for text in ["0", "1", "-17", "+250", "  99", "123456789"] {
            assert_eq!(stod(text.as_bytes()), stol(text.as_bytes()) as f64);
        }
    }
}
