//! Numeric parsing.

pub mod conversion;

pub use conversion::{
    ConversionStatus, Parsed, stod, stod_checked, stol, stol_checked, strtod, strtod_impl, strtol,
    strtol_clamped, strtol_impl,
};
