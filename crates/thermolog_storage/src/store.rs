//! Blob store trait definition.

use crate::error::StorageResult;

/// A named blob store for thermolog.
///
/// Blob stores are **opaque byte stores** keyed by a logical file name.
/// They provide whole-blob operations only; the log layer owns all format
/// interpretation - stores do not understand readings or JSON arrays.
///
/// # Invariants
///
/// - `write` replaces the named blob's content wholesale
/// - `read` returns exactly the bytes last written under that name, or
///   `None` if the name was never written (or was deleted)
/// - All I/O faults are reported as [`StorageError`](crate::StorageError)
///   values, never as panics
/// - Stores must be `Send + Sync` so handles can be shared
///
/// No partial-write visibility is guaranteed beyond what the underlying
/// substrate provides; atomic rename is not assumed.
///
/// # Implementors
///
/// - [`super::MemoryStore`] - For testing
/// - [`super::FileStore`] - For persistent storage
pub trait BlobStore: Send + Sync {
    /// Reads the whole blob stored under `name`.
    ///
    /// Returns `Ok(None)` if no blob with that name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the blob stored under `name` with `bytes`, wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or an I/O error occurs.
    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()>;

    /// Deletes the blob stored under `name`.
    ///
    /// Deleting an absent blob is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn delete(&self, name: &str) -> StorageResult<()>;
}
