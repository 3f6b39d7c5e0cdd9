//! Typed trial entry parsed at the input boundary.
//!
//! The browser layer hands over four strings (variable key, condition, trial
//! index, raw field text). Everything is validated here once, so the store
//! only ever sees a well-formed record.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::trial::TRIALS_PER_CONDITION;
use super::variable::{Condition, ExperimentVariable};

/// One validated data-entry event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialEntry {
    /// Which variable the learner is editing.
    pub variable: ExperimentVariable,
    /// The condition level being edited.
    pub condition: Condition,
    /// Slot within the condition, 0..=2.
    pub trial_index: usize,
    /// Parsed reading; `None` for a cleared or non-numeric field.
    pub value: Option<f64>,
}

impl TrialEntry {
    /// Build an entry from already-typed parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `trial_index` is out of range.
    pub fn new(
        variable: ExperimentVariable,
        condition: Condition,
        trial_index: usize,
        value: Option<f64>,
    ) -> Result<Self> {
        if trial_index >= TRIALS_PER_CONDITION {
            return Err(Error::InvalidInput(format!(
                "trial index {trial_index} out of range"
            )));
        }
        Ok(Self {
            variable,
            condition,
            trial_index,
            value: value.filter(|v| !v.is_nan()),
        })
    }

    /// Parse the raw string quadruple coming off an input event.
    ///
    /// A non-numeric `raw_value` is an absent reading, not an error — a
    /// learner clearing a field is normal. An unknown variable key, a
    /// non-numeric condition, or a bad trial index is a malformed event and
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an unrecognized variable key, an
    /// unparseable condition or trial index, or a trial index ≥ 3.
    pub fn parse(variable_key: &str, condition: &str, trial: &str, raw_value: &str) -> Result<Self> {
        let variable = ExperimentVariable::from_key(variable_key)
            .ok_or_else(|| Error::InvalidInput(format!("unknown variable key {variable_key:?}")))?;

        let condition = condition
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Condition::new)
            .ok_or_else(|| Error::InvalidInput(format!("bad condition value {condition:?}")))?;

        let trial_index = trial
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidInput(format!("bad trial index {trial:?}")))?;

        // Non-numeric field text means "cleared", never zero.
        let value = raw_value.trim().parse::<f64>().ok();

        Self::new(variable, condition, trial_index, value)
    }
}
