//! Measurement log rows recorded from the stopwatch in auto mode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum rows the measurement log accepts in one session.
pub const LOG_CAPACITY: usize = 50;

/// One recorded stopwatch measurement with the slider settings at the time.
///
/// Rows are append-only and numbered from 1 in recording order, matching the
/// table the learner sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementLogEntry {
    sequence: usize,
    length_cm: f64,
    weight_g: f64,
    amplitude_deg: f64,
    elapsed_seconds: f64,
    recorded_at: DateTime<Utc>,
}

impl MeasurementLogEntry {
    /// Create a log row timestamped now.
    #[must_use]
    pub fn new(
        sequence: usize,
        length_cm: f64,
        weight_g: f64,
        amplitude_deg: f64,
        elapsed_seconds: f64,
    ) -> Self {
        Self {
            sequence,
            length_cm,
            weight_g,
            amplitude_deg,
            elapsed_seconds,
            recorded_at: Utc::now(),
        }
    }

    /// 1-based row number.
    #[must_use]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }

    /// Pendulum length slider value (cm).
    #[must_use]
    pub const fn length_cm(&self) -> f64 {
        self.length_cm
    }

    /// Bob weight slider value (g).
    #[must_use]
    pub const fn weight_g(&self) -> f64 {
        self.weight_g
    }

    /// Amplitude slider value (degrees).
    #[must_use]
    pub const fn amplitude_deg(&self) -> f64 {
        self.amplitude_deg
    }

    /// Stopwatch reading at record time, in seconds.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Wall-clock time the row was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
