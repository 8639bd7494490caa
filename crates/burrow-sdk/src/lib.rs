//! High-level SDK for Burrow.
//!
//! Provides a unified API over the directory registry and the bitfield
//! engine, sharing one process-wide blob store handle. This is the main
//! entry point for applications embedding Burrow.

pub mod burrow;
pub mod error;

pub use burrow::Burrow;
pub use error::{BurrowError, BurrowResult};

// Re-export key types
pub use burrow_bits::{BitIndex, BitsError, IntoBitIndex, Truthy};
pub use burrow_dirs::DirError;
pub use burrow_store::{BlobStore, MemoryBlobStore, StoreError, StoreId, Value};
