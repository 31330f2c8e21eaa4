//! Publish capability abstraction.

use crate::error::{SyncError, SyncResult};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

/// A publish capability over the broker transport.
///
/// This trait abstracts the transport client (MQTT, HTTP, an in-process
/// loopback for tests), allowing the engine to stay ignorant of the wire
/// protocol beyond "publish(topic, payload) succeeded or not".
///
/// # Contract
///
/// - Report failure by returning an error, never by panicking; the engine
///   tolerates either but treats both as "delivery failed"
/// - Do not retain `payload` beyond the call
/// - A blocking implementation stalls the whole pass; callers needing
///   bounded latency must build the timeout into their implementation
pub trait Publisher: Send + Sync {
    /// Publishes one payload to the given topic.
    fn publish(&self, topic: &str, payload: &[u8]) -> SyncResult<()>;

    /// Checks whether the transport currently has a broker connection.
    fn is_connected(&self) -> bool;
}

/// A mock publisher for testing.
///
/// Records every successfully published message and supports per-topic
/// failure injection plus a connect/disconnect toggle.
#[derive(Debug, Default)]
pub struct MockPublisher {
    connected: AtomicBool,
    fail_topics: Mutex<HashSet<String>>,
    published: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockPublisher {
    /// Creates a new, connected mock publisher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connected: AtomicBool::new(true),
            fail_topics: Mutex::new(HashSet::new()),
            published: Mutex::new(Vec::new()),
        }
    }

    /// Sets the connected state.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Makes every publish to `topic` fail.
    pub fn fail_topic(&self, topic: impl Into<String>) {
        self.fail_topics.lock().insert(topic.into());
    }

    /// Clears all injected per-topic failures.
    pub fn clear_failures(&self) {
        self.fail_topics.lock().clear();
    }

    /// Returns all successfully published messages, in publish order.
    #[must_use]
    pub fn published(&self) -> Vec<(String, Vec<u8>)> {
        self.published.lock().clone()
    }

    /// Returns the number of successfully published messages.
    #[must_use]
    pub fn publish_count(&self) -> usize {
        self.published.lock().len()
    }
}

impl Publisher for MockPublisher {
    fn publish(&self, topic: &str, payload: &[u8]) -> SyncResult<()> {
        if !self.is_connected() {
            return Err(SyncError::NotConnected);
        }
        if self.fail_topics.lock().contains(topic) {
            return Err(SyncError::publish_failed(format!(
                "injected failure for {topic}"
            )));
        }
        self.published
            .lock()
            .push((topic.to_string(), payload.to_vec()));
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
