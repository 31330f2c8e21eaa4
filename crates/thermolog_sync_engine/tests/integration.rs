//! Integration tests for the full buffer-and-forward path.

use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use thermolog_codec::{decode_one, Reading};
use thermolog_core::{DeliveryLog, MeasurementLog};
use thermolog_storage::{BlobStore, MemoryStore, StorageResult};
use thermolog_sync_engine::{LoopbackBroker, MockPublisher, SyncConfig, SyncEngine};

fn reading(secs: i64, temperature: f64) -> Reading {
    Reading::new(Utc.timestamp_opt(secs, 0).unwrap(), temperature)
}

/// Counts writes passing through to an inner store, and can fail them.
struct InstrumentedStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InstrumentedStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            writes: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl BlobStore for InstrumentedStore {
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        self.inner.read(name)
    }

    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("injected write fault").into());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(name, bytes)
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        self.inner.delete(name)
    }
}

fn logs_over(store: &Arc<InstrumentedStore>) -> (MeasurementLog, DeliveryLog) {
    (
        MeasurementLog::new(Arc::clone(store) as Arc<dyn BlobStore>),
        DeliveryLog::new(Arc::clone(store) as Arc<dyn BlobStore>),
    )
}

#[test]
fn partial_failure_retains_exactly_the_failed_subset() {
    // Three readings; publish fails only for t2's topic. Expect delivered
    // count 2, delivery log {t1, t3}, pending exactly [t2].
    let store = Arc::new(InstrumentedStore::new());
    let (measurements, deliveries) = logs_over(&store);

    measurements
        .append(&reading(100, 20.1).with_device_id("t1"))
        .unwrap();
    measurements
        .append(&reading(200, 20.3).with_device_id("t2"))
        .unwrap();
    measurements
        .append(&reading(300, 20.5).with_device_id("t3"))
        .unwrap();

    let publisher = MockPublisher::new();
    publisher.fail_topic("home/thermostat/t2/telemetry");
    let engine = SyncEngine::new(SyncConfig::default(), publisher);

    let report = engine.sync_pending(&measurements, &deliveries);

    assert_eq!(report.delivered, 2);
    assert_eq!(report.retained, 1);
    assert!(report.committed);

    let delivered: Vec<String> = deliveries
        .read_all()
        .iter()
        .map(|r| r.device_id().to_string())
        .collect();
    assert_eq!(delivered, vec!["t1", "t3"]);

    let pending = measurements.read_all();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].device_id(), "t2");
    assert_eq!(pending[0].temperature(), 20.3);
}

#[test]
fn at_least_once_across_passes() {
    let store = Arc::new(InstrumentedStore::new());
    let (measurements, deliveries) = logs_over(&store);

    for i in 0..4 {
        measurements
            .append(&reading(i * 60, 19.0 + i as f64).with_device_id("dev"))
            .unwrap();
    }

    let publisher = MockPublisher::new();
    publisher.set_connected(false);
    let engine = SyncEngine::new(SyncConfig::default(), publisher);

    // Offline pass: everything survives, nothing delivered.
    let offline = engine.sync_pending(&measurements, &deliveries);
    assert_eq!(offline.delivered, 0);
    assert_eq!(measurements.read_all().len(), 4);

    // Reconnect: the backlog drains and every reading is delivered once.
    engine.publisher().set_connected(true);
    let online = engine.sync_pending(&measurements, &deliveries);
    assert_eq!(online.delivered, 4);
    assert!(measurements.read_all().is_empty());
    assert_eq!(deliveries.read_all().len(), 4);

    // A further pass has nothing to do.
    let idle = engine.sync_pending(&measurements, &deliveries);
    assert_eq!(idle.delivered, 0);
    assert_eq!(deliveries.read_all().len(), 4);
}

#[test]
fn empty_pass_performs_no_store_writes() {
    let store = Arc::new(InstrumentedStore::new());
    let (measurements, deliveries) = logs_over(&store);

    let engine = SyncEngine::new(SyncConfig::default(), MockPublisher::new());

    let before = store.write_count();
    let report = engine.sync_pending(&measurements, &deliveries);

    assert_eq!(report.delivered, 0);
    assert_eq!(store.write_count(), before);
}

#[test]
fn failed_commit_leaves_prior_state_authoritative() {
    let store = Arc::new(InstrumentedStore::new());
    let (measurements, deliveries) = logs_over(&store);

    measurements
        .append(&reading(100, 20.1).with_device_id("dev"))
        .unwrap();
    measurements
        .append(&reading(200, 20.3).with_device_id("dev"))
        .unwrap();

    let engine = SyncEngine::new(SyncConfig::default(), MockPublisher::new());

    // Publishes succeed but the terminal commit write fails.
    store.fail_writes.store(true, Ordering::SeqCst);
    let report = engine.sync_pending(&measurements, &deliveries);
    assert_eq!(report.delivered, 2);
    assert!(!report.committed);

    // The queue reverts to its pre-pass contents: the next pass
    // re-delivers (duplicates possible, loss never).
    store.fail_writes.store(false, Ordering::SeqCst);
    assert_eq!(measurements.read_all().len(), 2);

    let second = engine.sync_pending(&measurements, &deliveries);
    assert_eq!(second.delivered, 2);
    assert!(second.committed);
    assert!(measurements.read_all().is_empty());
    assert_eq!(engine.publisher().publish_count(), 4);
}

#[test]
fn corrupt_pending_blob_recovers_and_sync_continues() {
    let store = Arc::new(InstrumentedStore::new());
    store
        .inner
        .preload(thermolog_core::MEASUREMENTS_BLOB, b"%% corrupt %%");
    let (measurements, deliveries) = logs_over(&store);

    assert!(measurements.read_all().is_empty());

    measurements
        .append(&reading(100, 21.5).with_device_id("dev"))
        .unwrap();

    let engine = SyncEngine::new(SyncConfig::default(), MockPublisher::new());
    let report = engine.sync_pending(&measurements, &deliveries);

    assert_eq!(report.delivered, 1);
    assert_eq!(deliveries.read_all().len(), 1);
}

#[test]
fn published_payload_is_the_encoded_reading() {
    let store = Arc::new(InstrumentedStore::new());
    let (measurements, deliveries) = logs_over(&store);

    let original = reading(100, 21.57)
        .with_setpoint(22.0)
        .with_device_id("esp32-attic");
    measurements.append(&original).unwrap();

    let broker = LoopbackBroker::new();
    let engine = SyncEngine::new(SyncConfig::default(), broker);
    engine.sync_pending(&measurements, &deliveries);

    let messages = engine
        .publisher()
        .messages_for("home/thermostat/esp32-attic/telemetry");
    assert_eq!(messages.len(), 1);
    assert_eq!(decode_one(&messages[0]).unwrap(), original);
}

#[test]
fn trim_then_sync_delivers_only_the_survivors() {
    let store = Arc::new(InstrumentedStore::new());
    let (measurements, deliveries) = logs_over(&store);

    for i in 0..6 {
        measurements
            .append(&reading(i * 60, 18.0 + i as f64).with_device_id("dev"))
            .unwrap();
    }

    // Retention policy bounds the backlog before the next sync pass.
    assert_eq!(measurements.trim_to_most_recent(2).unwrap(), 4);

    let engine = SyncEngine::new(SyncConfig::default(), MockPublisher::new());
    let report = engine.sync_pending(&measurements, &deliveries);

    assert_eq!(report.delivered, 2);
    let temps: Vec<f64> = deliveries
        .read_all()
        .iter()
        .map(Reading::temperature)
        .collect();
    assert_eq!(temps, vec![22.0, 23.0]);
}

#[test]
fn delivery_log_failure_does_not_block_delivery() {
    // Separate stores: the delivery log's store always fails writes, the
    // measurement log's works.
    let good = Arc::new(InstrumentedStore::new());
    let bad = Arc::new(InstrumentedStore::new());
    bad.fail_writes.store(true, Ordering::SeqCst);

    let measurements = MeasurementLog::new(Arc::clone(&good) as Arc<dyn BlobStore>);
    let deliveries = DeliveryLog::new(Arc::clone(&bad) as Arc<dyn BlobStore>);

    measurements
        .append(&reading(100, 20.1).with_device_id("dev"))
        .unwrap();

    let engine = SyncEngine::new(SyncConfig::default(), MockPublisher::new());
    let report = engine.sync_pending(&measurements, &deliveries);

    // The audit append failed, but delivery counted and pending drained.
    assert_eq!(report.delivered, 1);
    assert!(report.committed);
    assert!(measurements.read_all().is_empty());
    assert!(deliveries.read_all().is_empty());
}
