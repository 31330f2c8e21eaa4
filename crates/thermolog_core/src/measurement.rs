//! The pending queue of readings awaiting delivery.

use crate::error::CoreResult;
use parking_lot::Mutex;
use std::sync::Arc;
use thermolog_codec::{decode_many, encode_many, Reading};
use thermolog_storage::BlobStore;
use tracing::{debug, warn};

/// Fixed blob name holding the JSON-encoded array of pending readings.
pub const MEASUREMENTS_BLOB: &str = "measurements.json";

/// The ordered, append-only sequence of readings not yet confirmed delivered.
///
/// Backed by a single named blob through the record codec. Readings are
/// stored oldest-first in insertion order; after a sync pass the log holds
/// exactly the entries whose delivery failed, in their original relative
/// order.
///
/// Absent and corrupt persisted state both read as an empty sequence -
/// corruption is traded for availability rather than surfaced. Each
/// read-modify-write span is guarded by an internal lock; the design still
/// assumes a single logical owner drives mutations.
pub struct MeasurementLog {
    store: Arc<dyn BlobStore>,
    op_lock: Mutex<()>,
}

impl MeasurementLog {
    /// Creates a measurement log over the given blob store.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            op_lock: Mutex::new(()),
        }
    }

    /// Appends a reading to the end of the pending queue.
    ///
    /// Reads the current persisted sequence (absent or malformed state
    /// counts as empty), appends, and writes the whole sequence back.
    /// One store read plus one store write.
    ///
    /// # Errors
    ///
    /// Returns an error if re-encoding or the terminal write fails. The
    /// producer-side caller decides whether to swallow it; see
    /// [`Recorder`](crate::Recorder).
    pub fn append(&self, reading: &Reading) -> CoreResult<()> {
        let _guard = self.op_lock.lock();
        let mut readings = self.load_or_empty();
        readings.push(reading.clone());
        self.commit(&readings)
    }

    /// Returns all pending readings, oldest first.
    ///
    /// Never fails: absence, storage faults, and corruption all yield an
    /// empty sequence.
    #[must_use]
    pub fn read_all(&self) -> Vec<Reading> {
        let _guard = self.op_lock.lock();
        self.load_or_empty()
    }

    /// Replaces the whole pending queue with `readings`.
    ///
    /// Used by the sync engine to commit the post-pass remainder.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails; the previously
    /// persisted sequence then remains authoritative.
    pub fn replace_all(&self, readings: &[Reading]) -> CoreResult<()> {
        let _guard = self.op_lock.lock();
        self.commit(readings)
    }

    /// Bounds the pending queue to its `max_items` most recent entries.
    ///
    /// Keeps the last `max_items` readings by stored order (insertion
    /// order, not timestamp order) and discards the rest. A no-op when
    /// `max_items` is zero or the queue is already within bounds.
    ///
    /// Returns the number of readings discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed sequence cannot be committed.
    pub fn trim_to_most_recent(&self, max_items: usize) -> CoreResult<usize> {
        if max_items == 0 {
            return Ok(0);
        }

        let _guard = self.op_lock.lock();
        let readings = self.load_or_empty();
        if readings.len() <= max_items {
            return Ok(0);
        }

        let discarded = readings.len() - max_items;
        let kept = &readings[discarded..];
        self.commit(kept)?;
        debug!(discarded, kept = kept.len(), "trimmed pending readings");
        Ok(discarded)
    }

    /// Loads the persisted sequence, treating absence, storage faults, and
    /// malformed contents alike as "no prior data".
    fn load_or_empty(&self) -> Vec<Reading> {
        let bytes = match self.store.read(MEASUREMENTS_BLOB) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(%err, blob = MEASUREMENTS_BLOB, "failed to read pending readings");
                return Vec::new();
            }
        };

        match decode_many(&bytes) {
            Ok(readings) => readings,
            Err(err) => {
                warn!(%err, blob = MEASUREMENTS_BLOB, "corrupt pending blob, starting a new sequence");
                Vec::new()
            }
        }
    }

    fn commit(&self, readings: &[Reading]) -> CoreResult<()> {
        let bytes = encode_many(readings)?;
        self.store.write(MEASUREMENTS_BLOB, &bytes)?;
        Ok(())
    }
}
