//! The directory registry and plain file operations.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use burrow_store::{BlobStore, StoreError, StoreId, Value};

use crate::error::{DirError, Result};

/// Prefix keeping directory namespaces apart from reserved ones.
const DIR_STORE_PREFIX: &str = "dir:";

/// An explicit registry of named directories over a shared blob store.
///
/// Each created directory is bound to its own store namespace; file
/// operations resolve the directory name through the registry and fail
/// with [`DirError::UnknownDirectory`] for names that were never created.
pub struct DirectoryRegistry {
    store: Arc<dyn BlobStore>,
    dirs: RwLock<HashMap<String, StoreId>>,
}

impl DirectoryRegistry {
    /// Create an empty registry over the shared store handle.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            dirs: RwLock::new(HashMap::new()),
        }
    }

    /// Create (or re-bind) a directory and return its namespace handle.
    ///
    /// Re-creating an existing directory is idempotent: the name is bound
    /// to the same namespace, so previously written files stay reachable.
    pub fn create_directory(&self, name: &str) -> Result<StoreId> {
        let id = StoreId::new(format!("{DIR_STORE_PREFIX}{name}"));
        let mut dirs = self.dirs.write().map_err(StoreError::backend)?;
        dirs.insert(name.to_string(), id.clone());
        debug!(dir = %name, "directory created");
        Ok(id)
    }

    /// Write `content` to `file` in `dir`, replacing any previous content.
    pub fn write_file(&self, dir: &str, file: &str, content: Value) -> Result<()> {
        let id = self.handle(dir)?;
        self.store.put(&id, file, content)?;
        debug!(dir = %dir, file = %file, "file written");
        Ok(())
    }

    /// Read the content of `file` in `dir`.
    pub fn read_file(&self, dir: &str, file: &str) -> Result<Value> {
        let id = self.handle(dir)?;
        match self.store.get(&id, file)? {
            Some(content) => Ok(content),
            None => Err(DirError::UnknownFile {
                dir: dir.to_string(),
                name: file.to_string(),
            }),
        }
    }

    /// Remove `file` from `dir`, reporting failure out of band.
    ///
    /// Removal failures are never returned: if `blocked` was supplied it
    /// is invoked with just the file name (no error detail), otherwise the
    /// failure is logged at warn level. Removing a file that does not
    /// exist in a known directory succeeds silently.
    pub fn remove_file(&self, dir: &str, file: &str, blocked: Option<&dyn Fn(&str)>) {
        match self.try_remove_file(dir, file) {
            Ok(()) => debug!(dir = %dir, file = %file, "file removed"),
            Err(err) => match blocked {
                Some(notify) => notify(file),
                None => warn!(dir = %dir, file = %file, error = %err, "file removal failed"),
            },
        }
    }

    /// Remove `file` from `dir`, propagating failure to the caller.
    pub fn try_remove_file(&self, dir: &str, file: &str) -> Result<()> {
        let id = self.handle(dir)?;
        self.store.delete(&id, file)?;
        Ok(())
    }

    /// Resolve a directory name to its namespace handle.
    fn handle(&self, dir: &str) -> Result<StoreId> {
        let dirs = self.dirs.read().map_err(StoreError::backend)?;
        dirs.get(dir).cloned().ok_or_else(|| DirError::UnknownDirectory {
            name: dir.to_string(),
        })
    }
}

impl std::fmt::Debug for DirectoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.dirs.read().map(|d| d.len()).unwrap_or(0);
        f.debug_struct("DirectoryRegistry")
            .field("directory_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use burrow_store::MemoryBlobStore;

    fn registry() -> DirectoryRegistry {
        DirectoryRegistry::new(Arc::new(MemoryBlobStore::new()))
    }

    // -----------------------------------------------------------------------
    // Create / write / read
    // -----------------------------------------------------------------------

    #[test]
    fn write_and_read_round_trip() {
        let registry = registry();
        registry.create_directory("notes").unwrap();
        registry
            .write_file("notes", "today.txt", Value::Text("hello".into()))
            .unwrap();

        let content = registry.read_file("notes", "today.txt").unwrap();
        assert_eq!(content, Value::Text("hello".into()));
    }

    #[test]
    fn write_to_unknown_directory_fails() {
        let registry = registry();
        let err = registry
            .write_file("ghost", "a.txt", Value::Text("x".into()))
            .unwrap_err();
        assert!(matches!(err, DirError::UnknownDirectory { .. }));
    }

    #[test]
    fn read_from_unknown_directory_fails() {
        let registry = registry();
        let err = registry.read_file("ghost", "a.txt").unwrap_err();
        assert!(matches!(err, DirError::UnknownDirectory { .. }));
    }

    #[test]
    fn read_missing_file_fails() {
        let registry = registry();
        registry.create_directory("notes").unwrap();
        let err = registry.read_file("notes", "absent.txt").unwrap_err();
        assert!(matches!(err, DirError::UnknownFile { .. }));
    }

    #[test]
    fn overwrite_replaces_content() {
        let registry = registry();
        registry.create_directory("notes").unwrap();
        registry
            .write_file("notes", "a", Value::Text("v1".into()))
            .unwrap();
        registry
            .write_file("notes", "a", Value::Bytes(vec![1, 2]))
            .unwrap();

        assert_eq!(
            registry.read_file("notes", "a").unwrap(),
            Value::Bytes(vec![1, 2])
        );
    }

    #[test]
    fn recreating_a_directory_keeps_its_files() {
        let registry = registry();
        registry.create_directory("notes").unwrap();
        registry
            .write_file("notes", "a", Value::Text("kept".into()))
            .unwrap();

        registry.create_directory("notes").unwrap();
        assert_eq!(
            registry.read_file("notes", "a").unwrap(),
            Value::Text("kept".into())
        );
    }

    #[test]
    fn directories_do_not_share_files() {
        let registry = registry();
        registry.create_directory("a").unwrap();
        registry.create_directory("b").unwrap();
        registry.write_file("a", "f", Value::Text("in a".into())).unwrap();

        assert!(matches!(
            registry.read_file("b", "f").unwrap_err(),
            DirError::UnknownFile { .. }
        ));
    }

    // -----------------------------------------------------------------------
    // Removal policy
    // -----------------------------------------------------------------------

    #[test]
    fn remove_then_read_fails() {
        let registry = registry();
        registry.create_directory("notes").unwrap();
        registry.write_file("notes", "a", Value::Text("x".into())).unwrap();

        registry.remove_file("notes", "a", None);
        assert!(matches!(
            registry.read_file("notes", "a").unwrap_err(),
            DirError::UnknownFile { .. }
        ));
    }

    #[test]
    fn removing_a_missing_file_is_silent() {
        let registry = registry();
        registry.create_directory("notes").unwrap();

        let calls = RefCell::new(Vec::new());
        let notify = |name: &str| calls.borrow_mut().push(name.to_string());
        registry.remove_file("notes", "never-written", Some(&notify));

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn blocked_callback_receives_just_the_file_name() {
        let registry = registry();

        let calls = RefCell::new(Vec::new());
        let notify = |name: &str| calls.borrow_mut().push(name.to_string());
        registry.remove_file("ghost", "a.txt", Some(&notify));

        assert_eq!(calls.borrow().as_slice(), ["a.txt"]);
    }

    #[test]
    fn removal_failure_without_callback_does_not_propagate() {
        let registry = registry();
        // Unknown directory, no callback: logged, not returned or panicked.
        registry.remove_file("ghost", "a.txt", None);
    }

    #[test]
    fn try_remove_file_propagates_unknown_directory() {
        let registry = registry();
        let err = registry.try_remove_file("ghost", "a.txt").unwrap_err();
        assert!(matches!(err, DirError::UnknownDirectory { .. }));
    }

    // -----------------------------------------------------------------------
    // Registry isolation
    // -----------------------------------------------------------------------

    #[test]
    fn independent_registries_do_not_share_directories() {
        let first = registry();
        let second = registry();
        first.create_directory("only-in-first").unwrap();

        assert!(matches!(
            second.read_file("only-in-first", "f").unwrap_err(),
            DirError::UnknownDirectory { .. }
        ));
    }

    #[test]
    fn debug_format() {
        let registry = registry();
        registry.create_directory("a").unwrap();
        let debug = format!("{registry:?}");
        assert!(debug.contains("DirectoryRegistry"));
        assert!(debug.contains("directory_count"));
    }
}
