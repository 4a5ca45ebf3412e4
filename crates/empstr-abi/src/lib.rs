// All extern "C" exports accept raw pointers from C callers; null is
// checked at entry, everything else is the caller's C string contract.
#![allow(clippy::missing_safety_doc)]
#![allow(non_snake_case)]
//! # empstr-abi
//!
//! ABI-compatible extern "C" boundary for the EMP string utilities.
//!
//! This crate produces a `cdylib` exposing the `EMP_*` symbol set. Each
//! function checks its pointers, scans the C string once to build a slice,
//! and delegates to the safe implementations in `empstr-core`.
//!
//! # Architecture
//!
//! ```text
//! C caller -> ABI entry (this crate) -> NUL scan -> Core impl -> return
//! ```
//!
//! A null input pointer is answered with a safe default (`0`, `0.0`, or a
//! null pointer) instead of being dereferenced.

mod util;

pub mod ctype_abi;
pub mod stdlib_abi;
pub mod string_abi;
