use crate::error::StoreResult;
use crate::value::{StoreId, Value};

/// Namespaced blob key-value store.
///
/// All implementations must satisfy these invariants:
/// - The store never interprets the values it holds — it is a pure
///   key-value store.
/// - A value reads back exactly as it was written (no truncation, no
///   encoding transformation).
/// - `put` replaces the entire value; readers never observe a partially
///   written entry.
/// - `delete` is idempotent: removing an absent entry is a no-op.
/// - All backend failures are propagated, never silently ignored.
pub trait BlobStore: Send + Sync {
    /// Read the value stored under `(store, key)`.
    ///
    /// Returns `Ok(None)` if nothing was ever stored there, or the entry
    /// was deleted. Returns `Err` on backend failure.
    fn get(&self, store: &StoreId, key: &str) -> StoreResult<Option<Value>>;

    /// Store a value under `(store, key)`, replacing any previous value
    /// in full.
    fn put(&self, store: &StoreId, key: &str, value: Value) -> StoreResult<()>;

    /// Remove the entry under `(store, key)`, if present.
    fn delete(&self, store: &StoreId, key: &str) -> StoreResult<()>;
}
