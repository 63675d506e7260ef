//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every inventory operation is a single deterministic attempt: errors are returned
/// to the immediate caller, and validation happens before any state is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed required input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation referenced an unknown product id (or name).
    #[error("not found: {0}")]
    NotFound(String),

    /// A product was added with an id that is already in use.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// A domain invariant would be violated (e.g. stock going negative when
    /// negative stock is rejected).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// `true` for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
