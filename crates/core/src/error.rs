//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and application layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing resources, business state). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed or missing input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A business rule rejected the operation (e.g. deactivating an inactive person).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The resource exists but is not available (e.g. a paused listing).
    #[error("not active: {0}")]
    NotActive(String),

    /// A conflicting resource already exists (e.g. duplicated document).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn not_active(msg: impl Into<String>) -> Self {
        Self::NotActive(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Stable machine-readable code, used by adapters when rendering errors.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::InvariantViolation(_) => "invariant_violation",
            DomainError::NotFound(_) => "not_found",
            DomainError::NotActive(_) => "not_active",
            DomainError::Conflict(_) => "conflict",
        }
    }
}
