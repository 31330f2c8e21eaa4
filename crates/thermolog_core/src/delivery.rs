//! The audit trail of confirmed-delivered readings.

use crate::error::CoreResult;
use parking_lot::Mutex;
use std::sync::Arc;
use thermolog_codec::{decode_many, encode_many, Reading};
use thermolog_storage::BlobStore;
use tracing::warn;

/// Fixed blob name holding the JSON-encoded array of delivered readings.
pub const SENT_BLOB: &str = "sent_measurements.json";

/// An append-only record of readings confirmed delivered to the broker.
///
/// Audit only: appended, never rewritten, and not read back by any
/// control-flow decision. Uses the same read-modify-write-whole pattern
/// as [`MeasurementLog`](crate::MeasurementLog) over its own blob; the
/// two logs are independent and need no cross-coordination.
pub struct DeliveryLog {
    store: Arc<dyn BlobStore>,
    op_lock: Mutex<()>,
}

impl DeliveryLog {
    /// Creates a delivery log over the given blob store.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            op_lock: Mutex::new(()),
        }
    }

    /// Appends a delivered reading to the audit trail.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails. The sync engine
    /// treats this as best-effort and never lets it block delivery.
    pub fn append(&self, reading: &Reading) -> CoreResult<()> {
        let _guard = self.op_lock.lock();
        let mut readings = self.load_or_empty();
        readings.push(reading.clone());
        let bytes = encode_many(&readings)?;
        self.store.write(SENT_BLOB, &bytes)?;
        Ok(())
    }

    /// Returns all delivered readings, oldest first.
    ///
    /// Never fails: absence, storage faults, and corruption all yield an
    /// empty sequence.
    #[must_use]
    pub fn read_all(&self) -> Vec<Reading> {
        let _guard = self.op_lock.lock();
        self.load_or_empty()
    }

    fn load_or_empty(&self) -> Vec<Reading> {
        let bytes = match self.store.read(SENT_BLOB) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(%err, blob = SENT_BLOB, "failed to read delivered readings");
                return Vec::new();
            }
        };

        match decode_many(&bytes) {
            Ok(readings) => readings,
            Err(err) => {
                warn!(%err, blob = SENT_BLOB, "corrupt delivery blob, starting a new sequence");
                Vec::new()
            }
        }
    }
}
