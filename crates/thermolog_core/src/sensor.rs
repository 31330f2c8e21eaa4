//! The sensor sampling seam.

use std::thread;
use std::time::Duration;

/// Delay between consecutive read attempts of one sample.
pub const SENSOR_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Narrow interface over a temperature sensor driver.
///
/// Implementations wrap the actual hardware (or a simulation) and report
/// a single read attempt as `Some(celsius)` or `None` on a failed read.
pub trait TemperatureProbe {
    /// Attempts one temperature read, in degrees Celsius.
    fn try_read_celsius(&mut self) -> Option<f64>;
}

/// Samples the probe up to `attempts` times and averages the successes.
///
/// Returns the NaN sentinel when every attempt fails. Downstream logs and
/// the sync engine never handle NaN specially - producers filter it before
/// recording (see [`Recorder`](crate::Recorder)).
#[must_use]
pub fn read_temperature(probe: &mut dyn TemperatureProbe, attempts: u32) -> f64 {
    let mut sum = 0.0;
    let mut successes = 0u32;

    for attempt in 0..attempts {
        if let Some(celsius) = probe.try_read_celsius() {
            sum += celsius;
            successes += 1;
        }
        if attempt + 1 < attempts {
            thread::sleep(SENSOR_RETRY_DELAY);
        }
    }

    if successes > 0 {
        sum / f64::from(successes)
    } else {
        f64::NAN
    }
}
