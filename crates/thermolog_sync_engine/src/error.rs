//! Error types for the sync engine.

use thiserror::Error;

/// Result type for publish operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors a publish capability can report.
///
/// The engine treats every variant the same way - the entry stays pending
/// for the next pass - but the distinction is useful in trace output.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The broker rejected or dropped the message.
    #[error("publish failed: {message}")]
    PublishFailed {
        /// Description of the failure.
        message: String,
    },

    /// No connection to the broker.
    #[error("not connected to broker")]
    NotConnected,
}

impl SyncError {
    /// Creates a publish failed error.
    pub fn publish_failed(message: impl Into<String>) -> Self {
        Self::PublishFailed {
            message: message.into(),
        }
    }
}
