//! In-memory blob store for testing.

use crate::error::{StorageError, StorageResult};
use crate::store::BlobStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// An in-memory blob store.
///
/// This store keeps all blobs in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral deployments that don't need persistence
///
/// # Thread Safety
///
/// This store is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use thermolog_storage::{BlobStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.write("config.json", b"{}").unwrap();
/// assert!(store.read("config.json").unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw bytes under `name` without going through [`BlobStore`].
    ///
    /// Useful for seeding corruption and recovery scenarios in tests.
    pub fn preload(&self, name: &str, bytes: &[u8]) {
        self.blobs.write().insert(name.to_string(), bytes.to_vec());
    }

    /// Returns a copy of the raw bytes stored under `name`, if any.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<Vec<u8>> {
        self.blobs.read().get(name).cloned()
    }

    /// Returns the number of blobs currently held.
    #[must_use]
    pub fn blob_count(&self) -> usize {
        self.blobs.read().len()
    }

    /// Removes all blobs from the store.
    pub fn clear(&self) {
        self.blobs.write().clear();
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.blobs.read().get(name).cloned())
    }

    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        if name.is_empty() {
            return Err(StorageError::InvalidName {
                name: name.to_string(),
            });
        }
        self.blobs.write().insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        self.blobs.write().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.blob_count(), 0);
        assert!(store.read("anything").unwrap().is_none());
    }

    #[test]
    fn memory_write_then_read() {
        let store = MemoryStore::new();
        store.write("a.json", b"hello").unwrap();
        assert_eq!(store.read("a.json").unwrap().as_deref(), Some(&b"hello"[..]));
    }

    #[test]
    fn memory_write_replaces_wholesale() {
        let store = MemoryStore::new();
        store.write("a.json", b"first contents").unwrap();
        store.write("a.json", b"second").unwrap();
        assert_eq!(
            store.read("a.json").unwrap().as_deref(),
            Some(&b"second"[..])
        );
    }

    #[test]
    fn memory_empty_name_rejected() {
        let store = MemoryStore::new();
        let result = store.write("", b"data");
        assert!(matches!(result, Err(StorageError::InvalidName { .. })));
    }

    #[test]
    fn memory_delete_removes_blob() {
        let store = MemoryStore::new();
        store.write("a.json", b"data").unwrap();
        store.delete("a.json").unwrap();
        assert!(store.read("a.json").unwrap().is_none());
    }

    #[test]
    fn memory_delete_absent_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("never-written").is_ok());
    }

    #[test]
    fn memory_preload_and_raw() {
        let store = MemoryStore::new();
        store.preload("b.json", b"not json at all");
        assert_eq!(
            store.read("b.json").unwrap().as_deref(),
            Some(&b"not json at all"[..])
        );
        assert_eq!(store.raw("b.json").as_deref(), Some(&b"not json at all"[..]));
    }

    #[test]
    fn memory_clear() {
        let store = MemoryStore::new();
        store.write("a", b"1").unwrap();
        store.write("b", b"2").unwrap();
        store.clear();
        assert_eq!(store.blob_count(), 0);
    }
}
