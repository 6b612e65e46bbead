//! Shared validation error taxonomy
//!
//! Every value-object constructor and entity factory returns a
//! [`DomainError`]. The `Display` strings are part of the public contract:
//! callers and tests assert on the literal text, so the wording here must
//! not drift.

use crate::closed_set::EnumError;
use thiserror::Error;

/// A validation failure during value-object or entity construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was empty or missing.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// A field fell below its minimum length.
    #[error("{0} must be at least {1} characters long")]
    TooShort(&'static str, usize),

    /// An identity field was not a well-formed UUID.
    #[error("invalid format uuid")]
    InvalidUuid,

    /// A fixed-message field or cross-field rule was violated.
    #[error("{0}")]
    Rule(&'static str),

    /// A currency code outside the allow-list. Carries the normalized code.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// An enumeration field failed to parse; surfaced verbatim.
    #[error(transparent)]
    Enum(#[from] EnumError),
}

impl DomainError {
    pub fn empty(field: &'static str) -> Self {
        DomainError::Empty(field)
    }

    pub fn too_short(field: &'static str, min: usize) -> Self {
        DomainError::TooShort(field, min)
    }

    pub fn rule(message: &'static str) -> Self {
        DomainError::Rule(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contract() {
        assert_eq!(
            DomainError::empty("street").to_string(),
            "street cannot be empty"
        );
        assert_eq!(
            DomainError::too_short("title", 3).to_string(),
            "title must be at least 3 characters long"
        );
        assert_eq!(DomainError::InvalidUuid.to_string(), "invalid format uuid");
        assert_eq!(
            DomainError::UnsupportedCurrency("EUR".into()).to_string(),
            "unsupported currency: EUR"
        );
    }

    #[test]
    fn enum_errors_surface_verbatim() {
        let err: DomainError = EnumError::invalid("Gender", "x").into();
        assert_eq!(err.to_string(), "invalid Gender: \"x\"");
    }
}
