#![no_main]
use libfuzzer_sys::fuzz_target;

use empstr_core::ParseError;
use empstr_core::stdlib::{
    ConversionStatus, stod, stod_checked, stol, stol_checked, strtod_impl, strtol,
    strtol_clamped, strtol_impl,
};
use empstr_core::string::strlen;

fuzz_target!(|data: &[u8]| {
    let len = strlen(data);

    let (val, consumed, status) = strtol_impl(data);
    assert!(consumed <= len);
    assert_eq!(stol(data), val);
    assert_eq!(strtol(data), (val, consumed));
    match (status, stol_checked(data)) {
        (ConversionStatus::Success, Ok(p)) => {
            assert_eq!((p.value, p.consumed), (val, consumed));
            assert_eq!(strtol_clamped(data), (val, consumed));
        }
        (ConversionStatus::NoDigits, Err(ParseError::NoDigits)) => {
            assert_eq!((val, consumed), (0, 0));
        }
        (ConversionStatus::Overflow, Err(ParseError::Overflow { consumed: c })) => {
            assert_eq!(c, consumed);
            assert_eq!(strtol_clamped(data).0, i64::MAX);
        }
        (ConversionStatus::Underflow, Err(ParseError::Underflow { consumed: c })) => {
            assert_eq!(c, consumed);
            assert_eq!(strtol_clamped(data).0, i64::MIN);
        }
        (status, result) => panic!("tier mismatch: {status:?} vs {result:?}"),
    }

    let (fval, fconsumed, fstatus) = strtod_impl(data);
    assert!(fconsumed <= len);
    assert_eq!(stod(data).to_bits(), fval.to_bits());
    if fstatus == ConversionStatus::Success {
        assert!(fval.is_finite());
        assert!(stod_checked(data).is_ok());
    } else {
        assert!(stod_checked(data).is_err());
    }
    // Any input the integer parser accepts is also a float prefix.
    if status != ConversionStatus::NoDigits {
        assert!(fconsumed >= consumed);
    }
});
