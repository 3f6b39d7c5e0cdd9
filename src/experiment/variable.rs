//! Experiment variables and their discrete condition levels.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three quantities a learner varies between swings.
///
/// Each variable carries its display metadata and the ordered set of
/// condition levels the apparatus supports. The levels double as the slider
/// range in auto mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentVariable {
    /// Pendulum length (cm) — the only variable that changes the period.
    Length,
    /// Bob weight (g).
    Weight,
    /// Swing amplitude (degrees).
    Amplitude,
}

impl ExperimentVariable {
    /// All variables in display order.
    pub const ALL: [Self; 3] = [Self::Length, Self::Weight, Self::Amplitude];

    /// Parse the string key used at the input boundary.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "length" => Some(Self::Length),
            "weight" => Some(Self::Weight),
            "amplitude" => Some(Self::Amplitude),
            _ => None,
        }
    }

    /// Stable string key for the variable.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Amplitude => "amplitude",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Length => "Pendulum length",
            Self::Weight => "Bob weight",
            Self::Amplitude => "Swing amplitude",
        }
    }

    /// Unit suffix shown next to condition values.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Length => "cm",
            Self::Weight => "g",
            Self::Amplitude => "°",
        }
    }

    /// Display color (hex), cosmetic only.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Length => "#3b82f6",
            Self::Weight => "#16a34a",
            Self::Amplitude => "#f97316",
        }
    }

    /// The discrete condition levels the apparatus supports, ascending.
    #[must_use]
    pub const fn conditions(self) -> &'static [f64] {
        match self {
            Self::Length => &[25.0, 50.0, 100.0, 200.0],
            Self::Weight => &[10.0, 20.0, 30.0, 40.0],
            Self::Amplitude => &[10.0, 20.0, 30.0],
        }
    }

    /// Slider step for auto mode.
    #[must_use]
    pub const fn slider_step(self) -> f64 {
        match self {
            Self::Length => 25.0,
            Self::Weight | Self::Amplitude => 10.0,
        }
    }
}

impl fmt::Display for ExperimentVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A numeric condition value with a total, numeric ordering.
///
/// Conditions key the per-variable trial tables, so they must order the way
/// a learner reads them: 100 cm after 50 cm, never lexicographically. NaN is
/// rejected at construction; everything downstream can rely on `total_cmp`
/// being a plain numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(f64);

impl Condition {
    /// Wrap a finite condition value; `None` for NaN or infinity.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Display label with the variable's unit, e.g. `"100cm"`.
    #[must_use]
    pub fn label(self, variable: ExperimentVariable) -> String {
        if self.0.fract() == 0.0 {
            format!("{}{}", self.0 as i64, variable.unit())
        } else {
            format!("{}{}", self.0, variable.unit())
        }
    }
}

impl Eq for Condition {}

impl Ord for Condition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Condition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_key_roundtrip() {
        for variable in ExperimentVariable::ALL {
            assert_eq!(ExperimentVariable::from_key(variable.key()), Some(variable));
        }
        assert_eq!(ExperimentVariable::from_key("gravity"), None);
    }

    #[test]
    fn test_conditions_are_ascending() {
        for variable in ExperimentVariable::ALL {
            let conditions = variable.conditions();
            for pair in conditions.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_condition_orders_numerically() {
        let a = Condition::new(50.0).unwrap();
        let b = Condition::new(100.0).unwrap();
        // "100" < "50" lexicographically; numerically it must be the reverse
        assert!(a < b);
    }

    #[test]
    fn test_condition_rejects_nan() {
        assert!(Condition::new(f64::NAN).is_none());
        assert!(Condition::new(f64::INFINITY).is_none());
        assert!(Condition::new(0.0).is_some());
    }

    #[test]
    fn test_condition_label() {
        let c = Condition::new(100.0).unwrap();
        assert_eq!(c.label(ExperimentVariable::Length), "100cm");
        assert_eq!(c.label(ExperimentVariable::Amplitude), "100°");
    }
}
