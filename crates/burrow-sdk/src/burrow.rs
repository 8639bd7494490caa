//! The [`Burrow`] handle: directories and bitfields over one shared store.

use std::sync::Arc;

use tracing::debug;

use burrow_bits::{BitfieldEngine, IntoBitIndex, Truthy};
use burrow_dirs::DirectoryRegistry;
use burrow_store::{BlobStore, MemoryBlobStore, StoreId, Value};

use crate::error::BurrowResult;

/// Unified access to a Burrow: named directories of plain files, plus the
/// bitfield sidecar addressed by the same `(directory, file)` pairs.
///
/// The blob store handle is acquired once at [`Burrow::open`] and shared
/// by every operation for the lifetime of the handle; [`Burrow::shutdown`]
/// releases it. Bitfield operations do not require the directory to have
/// been created; the sidecar lives in its own reserved namespace.
pub struct Burrow {
    dirs: DirectoryRegistry,
    bits: BitfieldEngine,
}

impl Burrow {
    /// Open a burrow over the given store handle.
    pub fn open(store: Arc<dyn BlobStore>) -> Self {
        let dirs = DirectoryRegistry::new(Arc::clone(&store));
        let bits = BitfieldEngine::new(store);
        debug!("burrow opened");
        Self { dirs, bits }
    }

    /// Open a burrow over a fresh [`MemoryBlobStore`].
    ///
    /// Intended for tests and short-lived embedding; nothing outlives the
    /// returned handle.
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryBlobStore::new()))
    }

    /// Release the store handle.
    ///
    /// The explicit counterpart to [`Burrow::open`]; after shutdown no
    /// further operations are possible through this handle.
    pub fn shutdown(self) {
        debug!("burrow shut down");
    }

    // ---- Directory operations ----

    /// Create (or re-bind) a named directory.
    pub fn create_directory(&self, name: &str) -> BurrowResult<StoreId> {
        Ok(self.dirs.create_directory(name)?)
    }

    /// Write plain file content into a directory.
    pub fn write_file(&self, dir: &str, file: &str, content: impl Into<Value>) -> BurrowResult<()> {
        Ok(self.dirs.write_file(dir, file, content.into())?)
    }

    /// Read plain file content from a directory.
    pub fn read_file(&self, dir: &str, file: &str) -> BurrowResult<Value> {
        Ok(self.dirs.read_file(dir, file)?)
    }

    /// Remove a file, reporting failure through `blocked` (or a log line)
    /// instead of an error.
    pub fn remove_file(&self, dir: &str, file: &str, blocked: Option<&dyn Fn(&str)>) {
        self.dirs.remove_file(dir, file, blocked);
    }

    // ---- Bitfield operations ----

    /// Write one bit of the bitfield for `(dir, file)`; returns the
    /// coerced flag that was written.
    pub fn set_bit<I, V>(&self, dir: &str, file: &str, index: I, value: V) -> BurrowResult<bool>
    where
        I: IntoBitIndex,
        V: Truthy,
    {
        Ok(self.bits.set_bit(dir, file, index, value)?)
    }

    /// Read one bit of the bitfield for `(dir, file)`.
    pub fn get_bit<I>(&self, dir: &str, file: &str, index: I) -> BurrowResult<bool>
    where
        I: IntoBitIndex,
    {
        Ok(self.bits.get_bit(dir, file, index)?)
    }

    /// Remove the entire bitfield for `(dir, file)`.
    pub fn clear_bits(&self, dir: &str, file: &str) -> BurrowResult<()> {
        Ok(self.bits.clear_bits(dir, file)?)
    }
}

impl std::fmt::Debug for Burrow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Burrow")
            .field("dirs", &self.dirs)
            .field("bits", &self.bits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BurrowError;
    use burrow_bits::BitsError;
    use burrow_dirs::DirError;

    // -----------------------------------------------------------------------
    // End-to-end over one shared store
    // -----------------------------------------------------------------------

    #[test]
    fn files_and_bits_share_one_store_without_aliasing() {
        let burrow = Burrow::in_memory();
        burrow.create_directory("inbox").unwrap();
        burrow.write_file("inbox", "msg-1", "hello").unwrap();
        burrow.set_bit("inbox", "msg-1", 0u64, true).unwrap();

        // The file content is untouched by the bit write, and vice versa.
        assert_eq!(
            burrow.read_file("inbox", "msg-1").unwrap(),
            Value::Text("hello".into())
        );
        assert!(burrow.get_bit("inbox", "msg-1", 0u64).unwrap());

        // Removing the file leaves the bitfield in place.
        burrow.remove_file("inbox", "msg-1", None);
        assert!(burrow.get_bit("inbox", "msg-1", 0u64).unwrap());

        // Clearing the bitfield leaves other files alone.
        burrow.write_file("inbox", "msg-2", "kept").unwrap();
        burrow.clear_bits("inbox", "msg-1").unwrap();
        assert_eq!(
            burrow.read_file("inbox", "msg-2").unwrap(),
            Value::Text("kept".into())
        );
    }

    #[test]
    fn bit_operations_do_not_require_the_directory() {
        let burrow = Burrow::in_memory();
        // No create_directory call: the sidecar is independent.
        assert!(!burrow.get_bit("nowhere", "f", 9u64).unwrap());
        burrow.set_bit("nowhere", "f", 9u64, true).unwrap();
        assert!(burrow.get_bit("nowhere", "f", 9u64).unwrap());
    }

    #[test]
    fn errors_surface_with_their_origin() {
        let burrow = Burrow::in_memory();

        assert!(matches!(
            burrow.read_file("ghost", "f").unwrap_err(),
            BurrowError::Dir(DirError::UnknownDirectory { .. })
        ));
        assert!(matches!(
            burrow.set_bit("d", "f", -3i64, true).unwrap_err(),
            BurrowError::Bits(BitsError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn independent_burrows_are_isolated() {
        let first = Burrow::in_memory();
        let second = Burrow::in_memory();

        first.set_bit("d", "f", 4u64, true).unwrap();
        assert!(!second.get_bit("d", "f", 4u64).unwrap());
    }

    #[test]
    fn open_shares_a_caller_provided_store() {
        let store = Arc::new(MemoryBlobStore::new());
        let burrow = Burrow::open(Arc::clone(&store) as Arc<dyn BlobStore>);

        burrow.set_bit("d", "f", 0u64, true).unwrap();
        burrow.shutdown();

        // Durable bytes belong to the store, not the handle.
        let reopened = Burrow::open(store as Arc<dyn BlobStore>);
        assert!(reopened.get_bit("d", "f", 0u64).unwrap());
    }

    #[test]
    fn truthy_flags_flow_through_the_facade() {
        let burrow = Burrow::in_memory();
        assert!(burrow.set_bit("d", "f", 1u64, 1u8).unwrap());
        assert!(!burrow.set_bit("d", "f", 1u64, 0u8).unwrap());
        assert!(!burrow.get_bit("d", "f", 1u64).unwrap());
    }
}
