//! Error types for thermolog core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core log operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Blob store error.
    #[error("storage error: {0}")]
    Storage(#[from] thermolog_storage::StorageError),

    /// Record codec error.
    #[error("codec error: {0}")]
    Codec(#[from] thermolog_codec::CodecError),
}
