//! # Pendulum Lab: measurement and simulation core for a pendulum experiment
//!
//! The engine behind a browser-based teaching aid: learners time pendulum
//! swings under varying length, weight, and amplitude conditions, see the
//! readings aggregated into period estimates, and watch a small-angle
//! kinematic simulation. This crate is the part with state and timing
//! correctness requirements; DOM construction, styling, and the charting
//! library are external sinks.
//!
//! ## Components
//!
//! - [`experiment`] — per-condition trial data and derived period series
//! - [`stopwatch`] — start/stop/reset elapsed tracker, centisecond display
//! - [`simulation`] — closed-form SHM angle and the cancellable frame loop
//! - [`LabSession`] — context object owning all three, one per session
//!
//! ## Example Usage
//!
//! ```rust
//! use pendulum_lab::experiment::{Condition, ExperimentVariable};
//! use pendulum_lab::LabSession;
//!
//! let mut session = LabSession::builder().build();
//!
//! let hundred = Condition::new(100.0).unwrap();
//! session
//!     .store_mut()
//!     .record_trial(ExperimentVariable::Length, hundred, 0, Some(20.1));
//!
//! let series = session.store().series_for(ExperimentVariable::Length);
//! assert_eq!(series[0].label, "100cm");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod clock;
pub mod error;
pub mod experiment;
pub mod simulation;
pub mod stopwatch;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use error::{Error, Result};

use clock::{Clock, SystemClock};
use experiment::{MeasurementLogEntry, MeasurementStore};
use simulation::Animator;
use stopwatch::{Stopwatch, StopwatchState};

/// One learner session: the store, the stopwatch, and the animator.
///
/// Created when the page loads, discarded on navigation away. Owning the
/// three components in one place replaces the shared mutable globals of a
/// script-per-page design; the UI layer holds exactly one of these.
pub struct LabSession<C: Clock + Clone = SystemClock> {
    store: MeasurementStore,
    stopwatch: Stopwatch<C>,
    animator: Animator<C>,
}

impl LabSession {
    /// Create a session builder on the system clock.
    #[must_use]
    pub fn builder() -> LabSessionBuilder {
        LabSessionBuilder::default()
    }
}

impl<C: Clock + Clone> LabSession<C> {
    /// The measurement store.
    #[must_use]
    pub const fn store(&self) -> &MeasurementStore {
        &self.store
    }

    /// Mutable access to the measurement store.
    pub fn store_mut(&mut self) -> &mut MeasurementStore {
        &mut self.store
    }

    /// The stopwatch.
    #[must_use]
    pub const fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }

    /// Mutable access to the stopwatch.
    pub fn stopwatch_mut(&mut self) -> &mut Stopwatch<C> {
        &mut self.stopwatch
    }

    /// The animator.
    #[must_use]
    pub const fn animator(&self) -> &Animator<C> {
        &self.animator
    }

    /// Mutable access to the animator.
    pub fn animator_mut(&mut self) -> &mut Animator<C> {
        &mut self.animator
    }

    /// Drive both periodic activities from the host's cooperative loop.
    ///
    /// The stopwatch sample and the animation frame share no mutable state,
    /// so one pump point serves both without locking.
    pub fn pump(&mut self) {
        self.stopwatch.sample();
        self.animator.frame();
    }

    /// Record the stopwatch's banked reading into the measurement log.
    ///
    /// Only meaningful after a stop: while the stopwatch is running or idle
    /// the record control is disabled, so this is a silent no-op returning
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogFull`] once the log holds 50 rows.
    pub fn record_stopwatch_measurement(
        &mut self,
        length_cm: f64,
        weight_g: f64,
        amplitude_deg: f64,
    ) -> Result<Option<&MeasurementLogEntry>> {
        if self.stopwatch.state() != StopwatchState::Paused {
            return Ok(None);
        }
        let elapsed = self.stopwatch.elapsed_seconds();
        self.store
            .record_log_entry(length_cm, weight_g, amplitude_deg, elapsed)
            .map(Some)
    }
}

/// Builder for [`LabSession`].
#[derive(Debug)]
pub struct LabSessionBuilder<C: Clock + Clone = SystemClock> {
    clock: C,
}

impl Default for LabSessionBuilder {
    fn default() -> Self {
        Self {
            clock: SystemClock::new(),
        }
    }
}

impl<C: Clock + Clone> LabSessionBuilder<C> {
    /// Substitute the monotonic clock source (a manual clock under test).
    #[must_use]
    pub fn clock<D: Clock + Clone>(self, clock: D) -> LabSessionBuilder<D> {
        LabSessionBuilder { clock }
    }

    /// Build the session.
    #[must_use]
    pub fn build(self) -> LabSession<C> {
        LabSession {
            store: MeasurementStore::new(),
            stopwatch: Stopwatch::new(self.clock.clone()),
            animator: Animator::new(self.clock),
        }
    }
}
