//! Thermolog station demo.
//!
//! Simulates one temperature station through an outage:
//! - samples a flaky probe and records readings
//! - syncs while the broker is unreachable (everything stays buffered)
//! - reconnects and drains the backlog
//! - trims the local history bound
//!
//! Run with: cargo run -p station_demo

use std::sync::Arc;
use thermolog_core::{
    read_temperature, DeliveryLog, MeasurementLog, Recorder, TemperatureProbe,
};
use thermolog_storage::{BlobStore, MemoryStore};
use thermolog_sync_engine::{LoopbackBroker, SyncConfig, SyncEngine};
use tracing::info;

/// A probe that drifts around 21 degrees and fails every fourth read.
struct DriftingProbe {
    tick: u32,
}

impl TemperatureProbe for DriftingProbe {
    fn try_read_celsius(&mut self) -> Option<f64> {
        self.tick += 1;
        if self.tick % 4 == 0 {
            return None;
        }
        Some(21.0 + f64::from(self.tick % 7) * 0.173)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = Arc::new(MemoryStore::new());
    let measurements = Arc::new(MeasurementLog::new(
        Arc::clone(&store) as Arc<dyn BlobStore>
    ));
    let deliveries = DeliveryLog::new(Arc::clone(&store) as Arc<dyn BlobStore>);
    let recorder = Recorder::new(Arc::clone(&measurements)).with_device_id("esp32-demo");

    let engine = SyncEngine::new(SyncConfig::default(), LoopbackBroker::new());

    let mut probe = DriftingProbe { tick: 0 };

    // Sample while the broker is down.
    engine.publisher().set_connected(false);
    for _ in 0..5 {
        let celsius = read_temperature(&mut probe, 3);
        recorder.record(celsius, Some(22.0));
    }
    let offline = engine.sync_pending(&measurements, &deliveries);
    info!(
        retained = offline.retained,
        "broker down, readings kept pending"
    );

    // Reconnect and drain.
    engine.publisher().set_connected(true);
    let online = engine.sync_pending(&measurements, &deliveries);
    info!(delivered = online.delivered, "backlog drained");

    // Keep sampling, bound the local history, sync again.
    for _ in 0..8 {
        let celsius = read_temperature(&mut probe, 3);
        recorder.record(celsius, Some(22.0));
    }
    let discarded = measurements
        .trim_to_most_recent(4)
        .expect("trim should commit");
    info!(discarded, "history bounded");

    engine.sync_pending(&measurements, &deliveries);

    let stats = engine.stats();
    info!(
        passes = stats.passes_completed,
        delivered = stats.readings_delivered,
        audit_trail = deliveries.read_all().len(),
        broker_messages = engine.publisher().total_messages(),
        "demo finished"
    );
}
