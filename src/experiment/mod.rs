//! Experiment data model and measurement store.
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentVariable (3) ──< Condition (discrete levels)
//!                                │
//!                                └── TrialSet (≤3 readings) ──> AggregateReading (derived)
//! MeasurementLogEntry (≤50)  [auto-mode stopwatch log]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pendulum_lab::experiment::{Condition, ExperimentVariable, MeasurementStore};
//!
//! let mut store = MeasurementStore::new();
//! let hundred = Condition::new(100.0).unwrap();
//!
//! // Three-trial mode: ten-oscillation timings in seconds
//! store.record_trial(ExperimentVariable::Length, hundred, 0, Some(20.0));
//! store.record_trial(ExperimentVariable::Length, hundred, 1, Some(20.2));
//!
//! let reading = store.aggregate(ExperimentVariable::Length, hundred);
//! assert!((reading.period.unwrap() - 2.01).abs() < 1e-9);
//! ```

mod entry;
mod log;
mod store;
mod trial;
mod variable;

pub use entry::TrialEntry;
pub use log::{MeasurementLogEntry, LOG_CAPACITY};
pub use store::{ChartSeries, ConditionRow, MeasurementStore, SeriesPoint};
pub use trial::{AggregateReading, TrialSet, OSCILLATIONS_PER_READING, TRIALS_PER_CONDITION};
pub use variable::{Condition, ExperimentVariable};
