//! # Thermolog Storage
//!
//! Blob store trait and implementations for thermolog.
//!
//! This crate provides the lowest-level storage abstraction for thermolog.
//! Blob stores are **opaque byte stores** keyed by logical name - they do
//! not interpret the data they hold.
//!
//! ## Design Principles
//!
//! - Stores hold whole named blobs (read-whole, write-whole, delete)
//! - No knowledge of record encodings or log layouts
//! - Must be `Send + Sync` for shared handles
//! - The log layer owns all format interpretation
//!
//! ## Available Stores
//!
//! - [`MemoryStore`] - For testing and ephemeral storage
//! - [`FileStore`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use thermolog_storage::{BlobStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.write("readings.json", b"[]").unwrap();
//! let data = store.read("readings.json").unwrap();
//! assert_eq!(data.as_deref(), Some(&b"[]"[..]));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod store;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::BlobStore;
