//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors surfaced by the quoting component.
///
/// All variants are propagated to the caller unchanged: the core performs
/// no retry, no default substitution and no local recovery.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Caller-supplied input violated an invariant (empty candidate list,
    /// zero rental days).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A repository lookup failed to resolve the requested record.
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Customer age is covered by no configured tax bracket.
    #[error("Age {age} is outside every configured tax bracket")]
    OutOfRange { age: u32 },

    /// A storage failure other than a missing record (unreadable store,
    /// malformed data, connection error).
    #[error("Database error: {message}")]
    Database { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
