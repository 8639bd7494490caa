//! The bitfield engine: bit-level reads and writes persisted through the
//! blob store.

use std::sync::Arc;

use tracing::debug;

use burrow_store::{BlobStore, StoreId, Value};

use crate::bitfield::Bitfield;
use crate::error::{BitsError, Result};
use crate::index::IntoBitIndex;
use crate::keyspace::{bit_key, bitfield_store_id};
use crate::truthy::Truthy;

/// Bit-level storage over the blob store.
///
/// The engine is stateless across calls: every operation independently
/// derives the storage key, fetches (or defaults) the current bytes,
/// mutates, and persists. Nothing is cached between calls, so durable
/// state can never diverge from an in-memory copy.
///
/// No ordering is guaranteed across concurrent calls targeting the same
/// key: two concurrent `set_bit` calls each read-modify-write the whole
/// array, so the later write wins and can discard the earlier flip.
/// Callers that need stronger guarantees must serialize writes per key;
/// the engine performs no locking, compare-and-swap, or retry.
pub struct BitfieldEngine {
    store: Arc<dyn BlobStore>,
    store_id: StoreId,
}

impl BitfieldEngine {
    /// Create an engine over the shared store handle.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            store_id: bitfield_store_id(),
        }
    }

    /// Write one bit of the bitfield addressed by `(dir, file)`.
    ///
    /// `index` may be any representation of a non-negative integer;
    /// anything else is rejected as [`BitsError::InvalidIndex`]. `value`
    /// is coerced through [`Truthy`] and the coerced flag is returned.
    ///
    /// The bitfield is created on first set, sized exactly to cover
    /// `index`, and zero-extended whenever `index` lands past its current
    /// end, so previously written bits are preserved. The resulting array is
    /// persisted unconditionally, even when the bit's value did not
    /// change. Exactly one store read and one store write per call.
    pub fn set_bit<I, V>(&self, dir: &str, file: &str, index: I, value: V) -> Result<bool>
    where
        I: IntoBitIndex,
        V: Truthy,
    {
        let index = index.into_bit_index()?;
        let flag = value.truthy();
        let key = bit_key(dir, file);

        let mut field = match self.load(&key)? {
            Some(field) => field,
            None => Bitfield::covering(index),
        };
        let before = field.len_bytes();
        field.set(index, flag);
        if field.len_bytes() > before {
            debug!(key = %key, from = before, to = field.len_bytes(), "bitfield grown");
        }

        self.store
            .put(&self.store_id, &key, Value::Bytes(field.into_bytes()))?;
        Ok(flag)
    }

    /// Read one bit of the bitfield addressed by `(dir, file)`.
    ///
    /// A bitfield that was never created, and any index past the stored
    /// length, reads as `Ok(false)`; absence is the designed default, not
    /// an error. Read-only; nothing is persisted.
    pub fn get_bit<I>(&self, dir: &str, file: &str, index: I) -> Result<bool>
    where
        I: IntoBitIndex,
    {
        let index = index.into_bit_index()?;
        let key = bit_key(dir, file);

        match self.load(&key)? {
            Some(field) => Ok(field.get(index)),
            None => Ok(false),
        }
    }

    /// Remove the entire bitfield for `(dir, file)` from the store.
    ///
    /// This clears the whole field, not a single bit. Idempotent: clearing
    /// a pair that has no bitfield is a no-op.
    pub fn clear_bits(&self, dir: &str, file: &str) -> Result<()> {
        let key = bit_key(dir, file);
        self.store.delete(&self.store_id, &key)?;
        debug!(key = %key, "bitfield cleared");
        Ok(())
    }

    /// Fetch and decode the stored bitfield under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<Bitfield>> {
        match self.store.get(&self.store_id, key)? {
            None => Ok(None),
            Some(value) => {
                let found = value.kind();
                let bytes = value.into_byte_array().ok_or_else(|| {
                    BitsError::UnsupportedFormat {
                        key: key.to_string(),
                        found,
                    }
                })?;
                Ok(Some(Bitfield::from_bytes(bytes)))
            }
        }
    }
}

impl std::fmt::Debug for BitfieldEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfieldEngine")
            .field("store_id", &self.store_id)
            .finish()
    }
}
