//! Domain and repository error models.

use std::time::Duration;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures (validation,
/// malformed identifiers). Storage concerns belong in [`RepositoryError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Repository operation error.
///
/// Shared by every backing store so that services can treat stores
/// interchangeably. `Storage` and `Timeout` are only produced by external
/// adapters; the in-memory stores fail with `NotFound`/`AlreadyExists` alone.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity is not in the store.
    #[error("not found")]
    NotFound,

    /// An insert collided with an entity that has the same identity.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// The backing store does not implement this operation.
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),

    /// Transport or storage-engine failure from an external backing store.
    #[error("storage error: {0}")]
    Storage(String),

    /// An external-store call exceeded its bounded per-operation deadline.
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
}

impl RepositoryError {
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
