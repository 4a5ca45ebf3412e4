//! String operations.
//!
//! Implements the EMP string functions as safe Rust operating on slices.

pub mod case;
pub mod cmp;
pub mod search;
pub mod strip;

// Re-export commonly used functions.
pub use case::{strcapitalize, strlwr, strupr};
pub use cmp::{strceq, strcneq, streq, strlen, strneq, terminated};
pub use search::{strcstr, strstr};
pub use strip::{lstrip, rstrip, strip};
