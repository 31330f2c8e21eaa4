//! Persisted device configuration.

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thermolog_codec::CodecError;
use thermolog_storage::BlobStore;
use tracing::warn;

/// Fixed blob name holding the JSON-encoded device configuration.
pub const CONFIG_BLOB: &str = "config.json";

/// Device configuration written by the provisioning flow and read at startup.
///
/// Plain data only - the WiFi association and MQTT client that consume
/// these fields live outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// WiFi network name.
    pub wifi_ssid: String,
    /// WiFi passphrase.
    pub wifi_password: String,
    /// MQTT broker host name or address.
    pub mqtt_host: String,
    /// MQTT broker port.
    pub mqtt_port: u16,
    /// MQTT client identifier; doubles as the device id in telemetry topics.
    pub mqtt_client_id: String,
    /// MQTT user name.
    pub mqtt_username: String,
    /// MQTT password.
    pub mqtt_password: String,
}

/// Loads and saves the device configuration through the blob store.
pub struct ConfigStore {
    store: Arc<dyn BlobStore>,
}

impl ConfigStore {
    /// Creates a config store over the given blob store.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Loads the persisted configuration.
    ///
    /// Returns `None` when no configuration has been saved yet or the
    /// blob cannot be read or parsed; failures are traced, not surfaced.
    #[must_use]
    pub fn load(&self) -> Option<DeviceConfig> {
        let bytes = match self.store.read(CONFIG_BLOB) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                warn!(%err, blob = CONFIG_BLOB, "failed to read device config");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(%err, blob = CONFIG_BLOB, "malformed device config");
                None
            }
        }
    }

    /// Saves the configuration, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn save(&self, config: &DeviceConfig) -> CoreResult<()> {
        let bytes = serde_json::to_vec(config)
            .map_err(|err| CodecError::encoding_failed(err.to_string()))?;
        self.store.write(CONFIG_BLOB, &bytes)?;
        Ok(())
    }

    /// Deletes the persisted configuration, returning the device to an
    /// unprovisioned state.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> CoreResult<()> {
        self.store.delete(CONFIG_BLOB)?;
        Ok(())
    }
}
