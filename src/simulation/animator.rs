//! Cancellable animation loop over an injected clock.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Clock;

use super::params::SimulationParameters;

/// Identifier of one animation run, unique within an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(u64);

type FrameCallback = Box<dyn FnMut(f64, &SimulationParameters)>;

struct ActiveRun {
    id: RunId,
    params: SimulationParameters,
    started: Duration,
    on_frame: FrameCallback,
}

/// Drives the per-frame angle callback for at most one run at a time.
///
/// The loop is unbounded: it produces frames every time the host pumps
/// [`Animator::frame`] until the run is cancelled. Starting a new run
/// cancels any in-flight run before the new one is scheduled, so two
/// animations can never race on the same rendering surface.
pub struct Animator<C: Clock> {
    clock: C,
    next_id: u64,
    active: Option<ActiveRun>,
}

impl<C: Clock> Animator<C> {
    /// Create an animator with no active run.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            active: None,
        }
    }

    /// Begin a run, cancelling any prior run first.
    ///
    /// `on_frame` receives the instantaneous angle in radians and the run's
    /// parameters each time the host pumps a frame.
    pub fn start<F>(&mut self, params: SimulationParameters, on_frame: F) -> RunId
    where
        F: FnMut(f64, &SimulationParameters) + 'static,
    {
        if let Some(prior) = self.active.take() {
            debug!(run = prior.id.0, "cancelling in-flight run before restart");
        }

        let id = RunId(self.next_id);
        self.next_id += 1;
        self.active = Some(ActiveRun {
            id,
            params,
            started: self.clock.now(),
            on_frame: Box::new(on_frame),
        });
        debug!(
            run = id.0,
            length_cm = params.length_cm(),
            amplitude_deg = params.amplitude_deg(),
            period_s = params.period_seconds(),
            "animation run started"
        );
        id
    }

    /// Cancel the active run, if any.
    pub fn cancel(&mut self) {
        if let Some(run) = self.active.take() {
            debug!(run = run.id.0, "animation run cancelled");
        }
    }

    /// Whether a run is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight run's id, if any.
    #[must_use]
    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }

    /// Cooperative per-frame entry point.
    ///
    /// Computes the elapsed time since the run started, derives the angle,
    /// and hands it to the run's callback. Returns the angle, or `None` when
    /// no run is active. A non-finite angle never reaches the callback; it
    /// cancels the run instead.
    pub fn frame(&mut self) -> Option<f64> {
        let run = self.active.as_mut()?;
        let elapsed = self.clock.now().saturating_sub(run.started).as_secs_f64();
        let angle = run.params.angle_at(elapsed);

        if !angle.is_finite() {
            trace!(run = run.id.0, elapsed, "non-finite angle, cancelling run");
            self.active = None;
            return None;
        }

        (run.on_frame)(angle, &run.params);
        Some(angle)
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for Animator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("clock", &self.clock)
            .field("active_run", &self.active_run())
            .finish_non_exhaustive()
    }
}
