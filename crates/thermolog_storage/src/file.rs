//! File-based blob store for persistent storage.

use crate::error::{StorageError, StorageResult};
use crate::store::BlobStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A file-based blob store.
///
/// Each blob is a single file under a root directory, named by the blob
/// name's final path component. Data survives process restarts.
///
/// # Name Handling
///
/// Blob names are reduced to their file-name component before use, so a
/// name like `"../measurements.json"` resolves to `measurements.json`
/// inside the root directory and cannot escape it.
///
/// # Example
///
/// ```no_run
/// use thermolog_storage::{BlobStore, FileStore};
/// use std::path::Path;
///
/// let store = FileStore::open(Path::new("/data")).unwrap();
/// store.write("measurements.json", b"[]").unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a file store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be created.
    pub fn open(root: &Path) -> StorageResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Returns the root directory of this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, name: &str) -> StorageResult<PathBuf> {
        let file_name = Path::new(name)
            .file_name()
            .ok_or_else(|| StorageError::InvalidName {
                name: name.to_string(),
            })?;
        Ok(self.root.join(file_name))
    }
}

impl BlobStore for FileStore {
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.blob_path(name)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.blob_path(name)?;
        fs::write(&path, bytes)?;
        Ok(())
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.blob_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
