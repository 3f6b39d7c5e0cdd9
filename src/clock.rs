//! Monotonic clock sources and the periodic-tick cadence.
//!
//! The stopwatch and the animator never read wall time directly; they take a
//! [`Clock`] so the cooperative loop stays deterministic under test. Native
//! builds measure against a [`std::time::Instant`] origin; wasm32 builds read
//! `performance.now()`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A monotonic time source.
///
/// `now()` is elapsed time since an arbitrary per-clock origin. Successive
/// reads never go backwards.
pub trait Clock {
    /// Current monotonic reading.
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by the host runtime.
#[derive(Debug, Clone)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    #[cfg(target_arch = "wasm32")]
    fn now(&self) -> Duration {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(Duration::ZERO, |p| Duration::from_secs_f64(p.now() / 1000.0))
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Clones share the same underlying reading, so a test can hold one handle
/// and advance time while the stopwatch or animator holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Move the clock forward by whole milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Periodic-tick cadence over a [`Clock`] reading.
///
/// Replaces interval polling: the host loop pumps [`Interval::is_due`] as
/// often as it likes and the cadence fires at most once per period. The
/// first pump after construction (or [`Interval::rearm`]) fires immediately.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    last_fired: Option<Duration>,
}

impl Interval {
    /// Create a cadence with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            last_fired: None,
        }
    }

    /// The configured period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Check whether the cadence fires at `now`, consuming the tick if so.
    pub fn is_due(&mut self, now: Duration) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_sub(last) < self.period => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    /// Forget the last firing so the next pump fires immediately.
    pub fn rearm(&mut self) {
        self.last_fired = None;
    }
}
