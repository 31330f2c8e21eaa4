//! In-process broker for integration tests and demos.

use crate::error::{SyncError, SyncResult};
use crate::publisher::Publisher;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-process broker that retains every published message per topic.
///
/// Stands in for a real MQTT broker in integration tests and demos,
/// letting a test assert on exactly what reached "the other side".
#[derive(Debug, Default)]
pub struct LoopbackBroker {
    connected: AtomicBool,
    messages: Mutex<HashMap<String, Vec<Vec<u8>>>>,
}

impl LoopbackBroker {
    /// Creates a new, connected loopback broker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connected: AtomicBool::new(true),
            messages: Mutex::new(HashMap::new()),
        }
    }

    /// Simulates losing or regaining the broker connection.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Returns the payloads received on `topic`, in arrival order.
    #[must_use]
    pub fn messages_for(&self, topic: &str) -> Vec<Vec<u8>> {
        self.messages.lock().get(topic).cloned().unwrap_or_default()
    }

    /// Returns every topic that has received at least one message.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        self.messages.lock().keys().cloned().collect()
    }

    /// Returns the total number of messages received across all topics.
    #[must_use]
    pub fn total_messages(&self) -> usize {
        self.messages.lock().values().map(Vec::len).sum()
    }
}

impl Publisher for LoopbackBroker {
    fn publish(&self, topic: &str, payload: &[u8]) -> SyncResult<()> {
        if !self.is_connected() {
            return Err(SyncError::NotConnected);
        }
        self.messages
            .lock()
            .entry(topic.to_string())
            .or_default()
            .push(payload.to_vec());
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
