//! # empstr-core
//!
//! Safe Rust implementations of the EMP ASCII string utilities: character
//! classification, case conversion, comparison, search, stripping and
//! lenient numeric parsing.
//!
//! Strings are byte slices where a NUL byte (`0x00`) marks the logical end.
//! A slice without a NUL is treated as terminated at its last byte, so no
//! operation reads or writes outside the caller's buffer. No `unsafe` code
//! is permitted at the crate level.

#![deny(unsafe_code)]

pub mod config;
pub mod ctype;
pub mod error;
pub mod stdlib;
pub mod string;

pub use config::ParseMode;
pub use error::{InputError, ParseError};
