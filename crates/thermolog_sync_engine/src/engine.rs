//! The drain-and-retry sync pass.

use crate::config::SyncConfig;
use crate::publisher::Publisher;
use parking_lot::RwLock;
use std::sync::Arc;
use thermolog_codec::encode_one;
use thermolog_core::{DeliveryLog, MeasurementLog};
use tracing::{debug, info, warn};

/// Cumulative statistics across sync passes.
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Total number of passes completed.
    pub passes_completed: u64,
    /// Total readings confirmed delivered.
    pub readings_delivered: u64,
    /// Total readings retained for a later pass.
    pub readings_retained: u64,
    /// Total readings dropped because they could not be encoded.
    pub readings_dropped: u64,
    /// Last error description, if any.
    pub last_error: Option<String>,
}

/// Result of one sync pass.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Readings confirmed delivered this pass.
    pub delivered: usize,
    /// Readings that failed to publish and stay pending.
    pub retained: usize,
    /// Readings dropped as unencodable.
    pub dropped: usize,
    /// Whether the terminal commit of the remainder landed.
    pub committed: bool,
}

/// Drains the pending queue through an injected publish capability.
///
/// The engine borrows the measurement log for the duration of one pass and
/// persists a full replacement before returning; if that terminal commit
/// fails, the prior pending state remains authoritative and the next pass
/// re-delivers (at-least-once, duplicates possible, loss never).
///
/// Not reentrant: callers must not start a second pass over the same logs
/// before a prior one returns.
pub struct SyncEngine<P: Publisher> {
    config: SyncConfig,
    publisher: Arc<P>,
    stats: RwLock<SyncStats>,
}

impl<P: Publisher> SyncEngine<P> {
    /// Creates a new sync engine.
    pub fn new(config: SyncConfig, publisher: P) -> Self {
        Self {
            config,
            publisher: Arc::new(publisher),
            stats: RwLock::new(SyncStats::default()),
        }
    }

    /// Returns a snapshot of the cumulative statistics.
    #[must_use]
    pub fn stats(&self) -> SyncStats {
        self.stats.read().clone()
    }

    /// Returns the configured publish capability.
    #[must_use]
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Runs one sync pass and returns what happened.
    ///
    /// Every pending reading gets exactly one publish attempt, oldest
    /// first. Successes are appended to the delivery log (best-effort)
    /// and dropped from pending; failures are kept in encounter order and
    /// committed back in a single terminal write. Readings that cannot be
    /// encoded are dropped from the pass entirely - a record that can
    /// never serialize would otherwise starve the queue.
    ///
    /// An empty queue returns immediately without any store writes.
    pub fn sync_pending(
        &self,
        measurements: &MeasurementLog,
        deliveries: &DeliveryLog,
    ) -> SyncReport {
        let pending = measurements.read_all();
        if pending.is_empty() {
            debug!("nothing pending, skipping sync pass");
            return SyncReport {
                committed: true,
                ..SyncReport::default()
            };
        }

        let mut report = SyncReport::default();
        let mut remainder = Vec::new();

        for reading in pending {
            let topic = self.config.topic_for(reading.device_id());

            let payload = match encode_one(&reading) {
                Ok(payload) => payload,
                Err(err) => {
                    warn!(%err, "dropping unencodable reading");
                    report.dropped += 1;
                    continue;
                }
            };

            match self.publisher.publish(&topic, &payload) {
                Ok(()) => {
                    if let Err(err) = deliveries.append(&reading) {
                        warn!(%err, "failed to record delivered reading in audit trail");
                    }
                    report.delivered += 1;
                }
                Err(err) => {
                    debug!(%err, topic, "publish failed, reading stays pending");
                    remainder.push(reading);
                }
            }
        }

        report.retained = remainder.len();
        report.committed = match measurements.replace_all(&remainder) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "failed to commit remainder, prior pending state stays authoritative");
                self.stats.write().last_error = Some(err.to_string());
                false
            }
        };

        {
            let mut stats = self.stats.write();
            stats.passes_completed += 1;
            stats.readings_delivered += report.delivered as u64;
            stats.readings_retained += report.retained as u64;
            stats.readings_dropped += report.dropped as u64;
        }

        info!(
            delivered = report.delivered,
            retained = report.retained,
            dropped = report.dropped,
            "sync pass finished"
        );
        report
    }
}
