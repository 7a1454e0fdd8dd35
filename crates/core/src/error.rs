//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each variant carries a human-readable detail. How a caller reacts depends on
/// the variant: `Validation` is shown to the user and recovered, `NotFound` on
/// navigation becomes the error view, and `Configuration`/`DuplicateName` abort
/// startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested view, product or category does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A view name was registered twice.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// User input failed a field constraint.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Startup configuration is inconsistent (e.g. no default view).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An internal invariant was violated (e.g. product ids exhausted).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        Self::DuplicateName(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether the error is a user-facing input problem rather than a bug or misconfiguration.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_is_recoverable() {
        assert!(DomainError::validation("too short").is_recoverable());
        assert!(!DomainError::not_found("product 7").is_recoverable());
        assert!(!DomainError::configuration("no default view").is_recoverable());
        assert!(!DomainError::invariant("no product id left").is_recoverable());
    }

    #[test]
    fn display_includes_detail() {
        let err = DomainError::duplicate_name("public");
        assert_eq!(err.to_string(), "duplicate name: public");
    }
}
