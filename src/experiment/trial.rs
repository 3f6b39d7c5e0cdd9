//! Trial sets and the aggregate reading derived from them.

use serde::{Deserialize, Serialize};

/// Maximum raw readings per condition in three-trial mode.
pub const TRIALS_PER_CONDITION: usize = 3;

/// Oscillations timed per raw reading; dividing by this yields the period.
pub const OSCILLATIONS_PER_READING: f64 = 10.0;

/// Up to three raw swing-time readings for one condition.
///
/// Each reading is the time in seconds for ten full oscillations. An absent
/// slot is a cleared input field, never a zero measurement. A trial set is
/// created lazily on the first reading and lives for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSet {
    readings: [Option<f64>; TRIALS_PER_CONDITION],
}

impl TrialSet {
    /// Create an empty trial set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            readings: [None; TRIALS_PER_CONDITION],
        }
    }

    /// Store `value` at `trial_index`.
    ///
    /// `None` or NaN clears the slot. An out-of-range index is a caller
    /// contract violation and fails fast.
    ///
    /// # Panics
    ///
    /// Panics if `trial_index >= TRIALS_PER_CONDITION`.
    pub fn set(&mut self, trial_index: usize, value: Option<f64>) {
        assert!(
            trial_index < TRIALS_PER_CONDITION,
            "trial index {trial_index} out of range (max {})",
            TRIALS_PER_CONDITION - 1
        );
        self.readings[trial_index] = value.filter(|v| !v.is_nan());
    }

    /// Replace the whole set with a single reading in slot 0.
    ///
    /// Overwrite mode: used when only one timed reading exists per condition.
    pub fn overwrite_single(&mut self, value: f64) {
        self.readings = [None; TRIALS_PER_CONDITION];
        self.set(0, Some(value));
    }

    /// The raw slots, absent or not.
    #[must_use]
    pub const fn readings(&self) -> &[Option<f64>; TRIALS_PER_CONDITION] {
        &self.readings
    }

    /// Readings that count toward aggregation: present and strictly positive.
    ///
    /// A stopwatch that was never started records zero; a cleared field
    /// records nothing. Neither may drag the average down.
    fn valid_readings(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().filter_map(|r| r.filter(|v| *v > 0.0))
    }

    /// Derive the aggregate for this set. Recomputed on every call.
    #[must_use]
    pub fn aggregate(&self) -> AggregateReading {
        let mut sum = 0.0;
        let mut count = 0_u32;
        for value in self.valid_readings() {
            sum += value;
            count += 1;
        }

        let average = (count > 0).then(|| sum / f64::from(count));
        AggregateReading {
            readings: self.readings,
            sum,
            average,
            period: average.map(|avg| avg / OSCILLATIONS_PER_READING),
        }
    }
}

/// Derived view over a [`TrialSet`]: sum, average, and single-swing period.
///
/// Never stored; always recomputed from the raw readings so arbitrary edits
/// to any slot are reflected immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateReading {
    /// Raw slots the aggregate was derived from.
    pub readings: [Option<f64>; TRIALS_PER_CONDITION],
    /// Total of present, positive readings (0.0 when none).
    pub sum: f64,
    /// Mean ten-oscillation time, absent when no valid reading exists.
    pub average: Option<f64>,
    /// Single-oscillation time, `average / 10`.
    pub period: Option<f64>,
}

impl AggregateReading {
    /// Whether any valid reading contributed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.average.is_none()
    }
}
