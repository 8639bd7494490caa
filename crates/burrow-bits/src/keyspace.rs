//! Derivation of storage keys for bitfield data.
//!
//! Bitfields live in the same blob store as plain file content, so their
//! keys carry a fixed namespace prefix that plain content keys never use,
//! and all bitfields share one reserved store namespace. The mapping
//! `(directory, file) -> key` is deterministic and injective within the
//! caller's naming scheme; embedded separators in the names are the
//! caller's responsibility.

use burrow_store::StoreId;

/// Prefix distinguishing bitfield keys from plain content keys.
const BIT_KEY_PREFIX: &str = "bitfield:";

/// Name of the reserved store namespace holding all bitfields.
const BIT_STORE_NAME: &str = "bitfields";

/// Derive the storage key for the bitfield of `(dir, file)`.
///
/// Pure function with no failure modes.
///
/// # Examples
///
/// ```
/// use burrow_bits::keyspace::bit_key;
///
/// assert_eq!(bit_key("inbox", "seen"), "bitfield:inbox/seen");
/// ```
pub fn bit_key(dir: &str, file: &str) -> String {
    format!("{BIT_KEY_PREFIX}{dir}/{file}")
}

/// The reserved store namespace for bitfield data.
pub fn bitfield_store_id() -> StoreId {
    StoreId::new(BIT_STORE_NAME)
}
