//! Numeric parse-mode configuration.
//!
//! [`ParseMode`] is a plain value chosen by the caller:
//! - `compat` (default): lenient parsing identical to the EMP C library.
//!   Malformed text yields a best-effort value and integer overflow wraps.
//! - `strict`: the checked parsers, which report missing digits and
//!   overflow as errors.
//!
//! The parsing functions in [`crate::stdlib`] never read it; the harness
//! runner carries the mode it tests under.

/// Numeric parsing policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Lenient, wraps on overflow, never signals failure.
    #[default]
    Compat,
    /// Checked: reports missing digits and overflow.
    Strict,
}

impl ParseMode {
    /// Parse from string (case-insensitive). Unknown values map to `Compat`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "checked" => Self::Strict,
            _ => Self::Compat,
        }
    }

    /// Stable lowercase name, as accepted by [`ParseMode::from_str_loose`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Strict => "strict",
        }
    }

    /// Returns true if failures should be reported rather than defaulted.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
