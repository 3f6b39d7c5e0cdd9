//! Parameters fixed for the duration of one simulation run.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::motion::{compute_angle, derive_period};

/// Immutable inputs of one animation run.
///
/// Constructed fresh each time a run starts; the period is derived at
/// construction so a zero or non-finite length is rejected before any frame
/// could divide by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    length_cm: f64,
    amplitude_deg: f64,
    period_seconds: f64,
}

impl SimulationParameters {
    /// Derive run parameters from slider values.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLength`] when `length_cm` is not a positive finite
    /// number (the period would be zero and the phase undefined);
    /// [`Error::InvalidInput`] when `amplitude_deg` is not finite.
    pub fn new(length_cm: f64, amplitude_deg: f64) -> Result<Self> {
        if !length_cm.is_finite() || length_cm <= 0.0 {
            return Err(Error::ZeroLength(length_cm));
        }
        if !amplitude_deg.is_finite() {
            return Err(Error::InvalidInput(format!(
                "amplitude must be finite, got {amplitude_deg}"
            )));
        }
        Ok(Self {
            length_cm,
            amplitude_deg,
            period_seconds: derive_period(length_cm),
        })
    }

    /// Pendulum length in centimeters.
    #[must_use]
    pub const fn length_cm(&self) -> f64 {
        self.length_cm
    }

    /// Release amplitude in degrees.
    #[must_use]
    pub const fn amplitude_deg(&self) -> f64 {
        self.amplitude_deg
    }

    /// Release amplitude in radians.
    #[must_use]
    pub fn amplitude_radians(&self) -> f64 {
        self.amplitude_deg.to_radians()
    }

    /// Derived single-oscillation period in seconds. Always positive.
    #[must_use]
    pub const fn period_seconds(&self) -> f64 {
        self.period_seconds
    }

    /// Angular displacement at `elapsed_seconds` into the run.
    #[must_use]
    pub fn angle_at(&self, elapsed_seconds: f64) -> f64 {
        compute_angle(elapsed_seconds, self.amplitude_radians(), self.period_seconds)
    }
}
