//! Start/stop/reset elapsed-time tracker with centisecond formatting.
//!
//! The state machine mirrors the lab bench's buttons: reset and record are
//! only reachable after a stop, so illegal transitions are silent no-ops
//! rather than errors — the disabled-button invariant lives here, not in
//! exception handling.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{Clock, Interval};

/// Display sampling resolution while running.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(10);

/// Stopwatch lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopwatchState {
    /// Zeroed, nothing banked.
    Idle,
    /// Counting; display tick armed.
    Running,
    /// Stopped with banked elapsed time; may resume or reset.
    Paused,
}

type SampleCallback = Box<dyn FnMut(u64)>;

/// Elapsed-time tracker over an injected monotonic [`Clock`].
///
/// State machine: `Idle --start--> Running --stop--> Paused --start-->
/// Running`, `Paused --reset--> Idle`. Running has no direct reset.
///
/// The host loop drives [`Stopwatch::sample`]; when running and the 10 ms
/// cadence is due, the current elapsed milliseconds are pushed to the
/// registered display callback.
pub struct Stopwatch<C: Clock> {
    clock: C,
    state: StopwatchState,
    /// Clock reading when the current running segment began.
    segment_started: Duration,
    /// Elapsed time banked from previous running segments.
    accumulated: Duration,
    cadence: Interval,
    on_sample: Option<SampleCallback>,
}

impl<C: Clock> Stopwatch<C> {
    /// Create an idle stopwatch on the given clock.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: StopwatchState::Idle,
            segment_started: Duration::ZERO,
            accumulated: Duration::ZERO,
            cadence: Interval::new(SAMPLE_PERIOD),
            on_sample: None,
        }
    }

    /// Register the display callback receiving elapsed milliseconds.
    pub fn set_display<F>(&mut self, on_sample: F)
    where
        F: FnMut(u64) + 'static,
    {
        self.on_sample = Some(Box::new(on_sample));
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> StopwatchState {
        self.state
    }

    /// Whether the stopwatch is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == StopwatchState::Running
    }

    /// Begin (or resume) counting. No-op when already running.
    pub fn start(&mut self) {
        match self.state {
            StopwatchState::Running => trace!("start ignored: already running"),
            StopwatchState::Idle | StopwatchState::Paused => {
                self.segment_started = self.clock.now();
                self.state = StopwatchState::Running;
                self.cadence.rearm();
                debug!(banked_ms = self.accumulated.as_millis() as u64, "stopwatch started");
            }
        }
    }

    /// Freeze the elapsed time. No-op unless running.
    pub fn stop(&mut self) {
        match self.state {
            StopwatchState::Running => {
                self.accumulated += self.clock.now().saturating_sub(self.segment_started);
                self.state = StopwatchState::Paused;
                debug!(elapsed_ms = self.accumulated.as_millis() as u64, "stopwatch stopped");
            }
            StopwatchState::Idle | StopwatchState::Paused => {
                trace!("stop ignored: not running");
            }
        }
    }

    /// Clear back to zero. Only legal from Paused; idempotent from Idle.
    pub fn reset(&mut self) {
        match self.state {
            StopwatchState::Paused => {
                self.accumulated = Duration::ZERO;
                self.state = StopwatchState::Idle;
                debug!("stopwatch reset");
            }
            StopwatchState::Idle => trace!("reset ignored: already idle"),
            StopwatchState::Running => trace!("reset ignored: still running"),
        }
    }

    /// Elapsed milliseconds: banked when idle or paused, live when running.
    ///
    /// Non-decreasing within a running segment; across stop/start cycles the
    /// banked value only grows.
    #[must_use]
    pub fn elapsed_millis(&self) -> u64 {
        let elapsed = match self.state {
            StopwatchState::Running => {
                self.accumulated + self.clock.now().saturating_sub(self.segment_started)
            }
            StopwatchState::Idle | StopwatchState::Paused => self.accumulated,
        };
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed time in seconds, the unit the measurement log records.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_millis() as f64 / 1000.0
    }

    /// Cooperative tick entry point.
    ///
    /// When running and the sampling cadence is due, recomputes the elapsed
    /// time, pushes it to the display callback, and returns it. Returns
    /// `None` otherwise.
    pub fn sample(&mut self) -> Option<u64> {
        if self.state != StopwatchState::Running {
            return None;
        }
        if !self.cadence.is_due(self.clock.now()) {
            return None;
        }

        let elapsed = self.elapsed_millis();
        if let Some(on_sample) = self.on_sample.as_mut() {
            on_sample(elapsed);
        }
        Some(elapsed)
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("clock", &self.clock)
            .field("state", &self.state)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}

/// Format elapsed milliseconds as `MM:SS.CC`.
///
/// Minutes and seconds zero-padded to two digits, then centiseconds.
#[must_use]
pub fn format_elapsed(millis: u64) -> String {
    let minutes = millis / 60_000;
    let seconds = (millis % 60_000) / 1000;
    let centis = (millis % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
