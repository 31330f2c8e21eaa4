//! # Thermolog Core
//!
//! Local telemetry buffering for thermolog.
//!
//! This crate provides:
//! - [`MeasurementLog`] - the ordered pending queue of readings awaiting delivery
//! - [`DeliveryLog`] - the append-only audit trail of delivered readings
//! - [`Recorder`] - producer-side recording with the degrade-gracefully policy
//! - [`ConfigStore`] / [`DeviceConfig`] - persisted device configuration
//! - [`TemperatureProbe`] / [`read_temperature`] - the sensor sampling seam
//!
//! ## Key Invariants
//!
//! - The pending queue is ordered oldest-first by insertion
//! - A sync pass retains exactly the failed subset, in original order
//! - Absent and corrupt persisted state both read as an empty sequence
//! - One logical owner drives each log's mutations; every
//!   read-modify-write span is guarded internally
//!
//! Logs are explicit objects constructed once at startup and passed by
//! handle to producer and sync call sites - there is no process-global
//! log state.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod delivery;
mod error;
mod measurement;
mod recorder;
mod sensor;

pub use config::{ConfigStore, DeviceConfig, CONFIG_BLOB};
pub use delivery::{DeliveryLog, SENT_BLOB};
pub use error::{CoreError, CoreResult};
pub use measurement::{MeasurementLog, MEASUREMENTS_BLOB};
pub use recorder::Recorder;
pub use sensor::{read_temperature, TemperatureProbe, SENSOR_RETRY_DELAY};
