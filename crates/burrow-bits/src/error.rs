//! Error types for bit operations.

use thiserror::Error;

use burrow_store::StoreError;

/// Errors that can occur during bit operations.
#[derive(Debug, Error)]
pub enum BitsError {
    /// The caller-supplied bit index is not a non-negative integer.
    #[error("invalid bit index {value}: {reason}")]
    InvalidIndex { value: String, reason: String },

    /// The value stored under a bitfield key is not interpretable as a
    /// byte array (for example, it was overwritten out of band with text).
    #[error("stored value under {key:?} is not binary data (found {found})")]
    UnsupportedFormat { key: String, found: &'static str },

    /// Failure from the underlying blob store, propagated un-retried.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl BitsError {
    /// Build an [`BitsError::InvalidIndex`] for a rejected index value.
    pub fn invalid_index(value: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::InvalidIndex {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for bit operations.
pub type Result<T> = std::result::Result<T, BitsError>;
