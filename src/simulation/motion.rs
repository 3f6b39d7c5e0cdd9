//! Closed-form small-angle pendulum motion.
//!
//! The angle follows simple harmonic motion, `θ(t) = A·cos(2πt/T)`. This is
//! the small-angle approximation, not a numerical integration of the true
//! nonlinear pendulum ODE: it is exact only as amplitude approaches zero,
//! which is a known physical simplification of the teaching model.

use std::f64::consts::TAU;

/// Standard gravity used throughout the lab, m/s².
pub const GRAVITY: f64 = 9.8;

/// Period in seconds for a pendulum of the given length in centimeters.
///
/// `T = 2π·sqrt(L/g)` with `L` in meters. Length 0 yields period 0; callers
/// that drive an animation must reject that before dividing by it, which
/// [`super::SimulationParameters::new`] does.
#[must_use]
pub fn derive_period(length_cm: f64) -> f64 {
    TAU * (length_cm / 100.0 / GRAVITY).sqrt()
}

/// Instantaneous angular displacement in radians.
///
/// `amplitude · cos(2π · elapsed / period)`. `period_seconds` must be
/// nonzero and finite.
#[must_use]
pub fn compute_angle(elapsed_seconds: f64, amplitude_radians: f64, period_seconds: f64) -> f64 {
    amplitude_radians * (TAU * elapsed_seconds / period_seconds).cos()
}
