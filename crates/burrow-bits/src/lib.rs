//! Bitfield storage engine for Burrow.
//!
//! A bitfield is an arbitrarily large, sparse array of boolean flags
//! addressed by a `(directory, file)` pair and a bit index. Flags are
//! packed eight to a byte and persisted through the blob store as a raw
//! byte array with no header and no length metadata; the stored value *is*
//! the packed array.
//!
//! The engine is deliberately lazy and forgiving on the read side: a
//! bitfield does not exist until the first set, grows on demand (never
//! shrinks), and any bit that was never written reads as `false`,
//! including every bit of a bitfield that was never created.
//!
//! # Modules
//!
//! - [`error`] — Error types for bit operations
//! - [`keyspace`] — Derivation of storage keys for bitfield data
//! - [`bitfield`] — The growable byte-packed [`Bitfield`] array
//! - [`index`] — Bit index validation via [`IntoBitIndex`]
//! - [`truthy`] — Boolean coercion of caller-supplied flag values
//! - [`engine`] — The [`BitfieldEngine`] persisting bitfields through the
//!   blob store

pub mod bitfield;
pub mod engine;
pub mod error;
pub mod index;
pub mod keyspace;
pub mod truthy;

pub use bitfield::Bitfield;
pub use engine::BitfieldEngine;
pub use error::{BitsError, Result};
pub use index::{BitIndex, IntoBitIndex};
pub use keyspace::{bit_key, bitfield_store_id};
pub use truthy::Truthy;
