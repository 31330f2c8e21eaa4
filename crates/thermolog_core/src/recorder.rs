//! Producer-side recording policy.

use crate::measurement::MeasurementLog;
use chrono::Utc;
use std::sync::Arc;
use thermolog_codec::Reading;
use tracing::{debug, warn};

/// Records sensor samples into the measurement log.
///
/// This is where the degrade-gracefully policy lives, explicitly: the log's
/// `append` returns a `Result`, and the recorder chooses to trace and
/// swallow failures so the measurement cadence never stalls on storage
/// trouble. It also filters the sensor's NaN sentinel, which must never
/// reach the pending queue.
pub struct Recorder {
    log: Arc<MeasurementLog>,
    device_id: Option<String>,
}

impl Recorder {
    /// Creates a recorder over the given measurement log.
    #[must_use]
    pub fn new(log: Arc<MeasurementLog>) -> Self {
        Self {
            log,
            device_id: None,
        }
    }

    /// Sets the device identifier stamped onto recorded readings.
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Records a temperature sample taken now.
    ///
    /// Returns `true` if the reading was appended, `false` if it was
    /// skipped (NaN sentinel) or the append failed and was swallowed.
    pub fn record_temperature(&self, celsius: f64) -> bool {
        self.record(celsius, None)
    }

    /// Records a temperature sample with the currently desired setpoint.
    ///
    /// Returns `true` if the reading was appended, `false` if it was
    /// skipped or the append failed and was swallowed.
    pub fn record(&self, celsius: f64, desired_setpoint: Option<f64>) -> bool {
        if celsius.is_nan() {
            debug!("skipping sample: sensor produced no reading");
            return false;
        }

        let mut reading = Reading::new(Utc::now(), celsius);
        if let Some(setpoint) = desired_setpoint {
            reading = reading.with_setpoint(setpoint);
        }
        if let Some(device_id) = &self.device_id {
            reading = reading.with_device_id(device_id.clone());
        }

        match self.log.append(&reading) {
            Ok(()) => {
                debug!(
                    timestamp = %reading.timestamp(),
                    temperature = reading.temperature(),
                    "appended reading"
                );
                true
            }
            Err(err) => {
                warn!(%err, "failed to persist reading, continuing");
                false
            }
        }
    }
}
