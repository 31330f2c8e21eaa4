//! The temperature reading value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel device identifier for readings recorded without one.
pub const UNKNOWN_DEVICE: &str = "unknown";

/// A single temperature reading.
///
/// Immutable once constructed. The temperature is rounded at construction
/// time by truncation toward zero at the hundredths digit; timestamps are
/// wall-clock UTC and are NOT guaranteed monotonic across readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    timestamp: DateTime<Utc>,
    temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    desired_setpoint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_id: Option<String>,
}

impl Reading {
    /// Creates a reading, truncating the temperature to two decimals.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, temperature: f64) -> Self {
        Self {
            timestamp,
            temperature: truncate_hundredths(temperature),
            desired_setpoint: None,
            device_id: None,
        }
    }

    /// Attaches the desired setpoint active when this reading was taken.
    #[must_use]
    pub fn with_setpoint(mut self, desired_setpoint: f64) -> Self {
        self.desired_setpoint = Some(desired_setpoint);
        self
    }

    /// Attaches the identifier of the device that produced this reading.
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// The moment this reading was taken.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The measured temperature in degrees Celsius, two decimals.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The desired setpoint active at sample time, if any.
    #[must_use]
    pub fn desired_setpoint(&self) -> Option<f64> {
        self.desired_setpoint
    }

    /// The producing device's identifier, or [`UNKNOWN_DEVICE`] if absent.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.device_id.as_deref().unwrap_or(UNKNOWN_DEVICE)
    }
}

/// Truncation toward zero at the hundredths digit, not banker's rounding.
fn truncate_hundredths(value: f64) -> f64 {
    (value * 100.0) as i64 as f64 / 100.0
}
