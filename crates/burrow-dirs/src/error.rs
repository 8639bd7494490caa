//! Error types for directory operations.

use thiserror::Error;

use burrow_store::StoreError;

/// Errors that can occur during directory and plain file operations.
#[derive(Debug, Error)]
pub enum DirError {
    /// The directory was never created in this registry.
    #[error("directory {name:?} does not exist")]
    UnknownDirectory { name: String },

    /// The file does not exist in the directory.
    #[error("file {name:?} not found in {dir:?}")]
    UnknownFile { dir: String, name: String },

    /// Failure from the underlying blob store.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for directory operations.
pub type Result<T> = std::result::Result<T, DirError>;
