//! Error types for checked entry points.

use thiserror::Error;

/// Rejected string input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The buffer holds no NUL terminator.
    #[error("string is not NUL-terminated within its buffer")]
    Unterminated,
}

/// Failure of a strict numeric parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No digit followed the optional whitespace and sign.
    #[error("no digits to parse")]
    NoDigits,
    /// The value is too large (positive) for the target type.
    #[error("numeric overflow after {consumed} bytes")]
    Overflow { consumed: usize },
    /// The value is too large (negative) for the target type.
    #[error("numeric underflow after {consumed} bytes")]
    Underflow { consumed: usize },
}
