//! Error types for blob store operations.

use thiserror::Error;

/// Errors from blob store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected the operation (quota exhausted, connection
    /// lost, poisoned lock, ...).
    #[error("store backend failure: {reason}")]
    Backend { reason: String },

    /// I/O error from a file-based backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Build a [`StoreError::Backend`] from any displayable reason.
    pub fn backend(reason: impl std::fmt::Display) -> Self {
        Self::Backend {
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
