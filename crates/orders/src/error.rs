//! Order service error model.

use thiserror::Error;

use barkeep_core::{DomainError, RepositoryError};

/// Error returned by the order service and anything composed on top of it.
///
/// Repository and domain failures pass through unchanged (`#[from]`) so the
/// caller can still match on the original kind.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Entity construction or validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A repository call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A composition step failed, or the composed service is incomplete.
    #[error("configuration failed: {0}")]
    Configuration(String),
}

impl OrderError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
