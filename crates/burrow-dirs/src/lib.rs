//! Directory registry and plain file operations for Burrow.
//!
//! A directory is a named logical container for plain file entries. The
//! registry is an explicit object mapping directory names to store
//! namespaces. It is constructed at startup and injected wherever it is
//! needed rather than living as a module-level singleton, so every test
//! can run against its own isolated instance.
//!
//! File content passes through to the blob store untouched. The one piece
//! of policy this crate owns is removal: a failed removal is reported
//! through an optional callback (or logged) instead of being returned as
//! an error, so bulk-cleanup callers are not forced into failure handling.
//!
//! # Modules
//!
//! - [`error`] — Error types for directory operations
//! - [`registry`] — The [`DirectoryRegistry`] and file operations

pub mod error;
pub mod registry;

pub use error::{DirError, Result};
pub use registry::DirectoryRegistry;
