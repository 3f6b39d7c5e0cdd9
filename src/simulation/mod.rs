//! Pendulum simulation: closed-form SHM motion and the animation loop.
//!
//! ## Usage
//!
//! ```rust
//! use pendulum_lab::clock::ManualClock;
//! use pendulum_lab::simulation::{Animator, SimulationParameters};
//!
//! let clock = ManualClock::new();
//! let mut animator = Animator::new(clock.clone());
//!
//! let params = SimulationParameters::new(100.0, 20.0)?;
//! animator.start(params, |angle, p| {
//!     // hand (angle, params) to the render surface
//!     let _ = (angle, p.length_cm());
//! });
//!
//! clock.advance_millis(16);
//! animator.frame();
//! # Ok::<(), pendulum_lab::Error>(())
//! ```

mod animator;
mod motion;
mod params;

pub use animator::{Animator, RunId};
pub use motion::{compute_angle, derive_period, GRAVITY};
pub use params::SimulationParameters;
