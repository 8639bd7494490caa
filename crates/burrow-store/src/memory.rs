//! In-memory blob store for tests and embedding.
//!
//! [`MemoryBlobStore`] holds every entry in a `HashMap` behind a `RwLock`.
//! It implements the full [`BlobStore`] trait and is suitable for unit
//! tests, REPL sessions, and short-lived processes. Data is lost when the
//! store is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlobStore;
use crate::value::{StoreId, Value};

/// An in-memory implementation of [`BlobStore`].
///
/// Entries are keyed by `(store id, key)` and cloned on read. A poisoned
/// lock surfaces as [`StoreError::Backend`] rather than a panic, matching
/// the propagation contract of the trait.
pub struct MemoryBlobStore {
    entries: RwLock<HashMap<(StoreId, String), Value>>,
}

impl MemoryBlobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored, across all namespaces.
    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries from all namespaces.
    pub fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, store: &StoreId, key: &str) -> StoreResult<Option<Value>> {
        let map = self.entries.read().map_err(StoreError::backend)?;
        Ok(map.get(&(store.clone(), key.to_string())).cloned())
    }

    fn put(&self, store: &StoreId, key: &str, value: Value) -> StoreResult<()> {
        let mut map = self.entries.write().map_err(StoreError::backend)?;
        map.insert((store.clone(), key.to_string()), value);
        Ok(())
    }

    fn delete(&self, store: &StoreId, key: &str) -> StoreResult<()> {
        let mut map = self.entries.write().map_err(StoreError::backend)?;
        map.remove(&(store.clone(), key.to_string()));
        Ok(())
    }
}

impl std::fmt::Debug for MemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBlobStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
