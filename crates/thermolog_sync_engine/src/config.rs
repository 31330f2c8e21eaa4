//! Configuration for the sync engine.

/// Default topic prefix for published telemetry.
pub const DEFAULT_TOPIC_PREFIX: &str = "home/thermostat";

/// Configuration for sync passes.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Prefix of every telemetry topic.
    pub topic_prefix: String,
}

impl SyncConfig {
    /// Creates a configuration with the given topic prefix.
    pub fn new(topic_prefix: impl Into<String>) -> Self {
        Self {
            topic_prefix: topic_prefix.into(),
        }
    }

    /// Computes the telemetry topic for a device.
    ///
    /// The topic is deterministic: `{prefix}/{device_id}/telemetry`.
    #[must_use]
    pub fn topic_for(&self, device_id: &str) -> String {
        format!("{}/{}/telemetry", self.topic_prefix, device_id)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC_PREFIX)
    }
}
