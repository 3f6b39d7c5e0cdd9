//! Measurement store - in-memory trial data and derived period series.
//!
//! This is the leaf component of the lab core: it owns the per-condition
//! trial tables for the three experiment variables and the auto-mode
//! measurement log, and derives everything the chart and table sinks need.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::entry::TrialEntry;
use super::log::{MeasurementLogEntry, LOG_CAPACITY};
use super::trial::{AggregateReading, TrialSet};
use super::variable::{Condition, ExperimentVariable};

/// One chart-feed point: a condition with a defined period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Numeric condition value.
    pub condition: f64,
    /// Display label, e.g. `"100cm"`.
    pub label: String,
    /// Single-oscillation time in seconds.
    pub period: f64,
}

/// The exact `(seriesLabel, labels, values)` payload the chart sink redraws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series label, the variable's display name.
    pub name: String,
    /// Per-bar condition labels.
    pub labels: Vec<String>,
    /// Per-bar period values.
    pub values: Vec<f64>,
}

/// One table-sink row: a condition with its raw readings and aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRow {
    /// Numeric condition value.
    pub condition: f64,
    /// Display label, e.g. `"50cm"`.
    pub label: String,
    /// Derived sum/average/period over the raw readings.
    pub aggregate: AggregateReading,
}

/// In-memory store for a session's measurements.
///
/// ## Design
///
/// Trial sets are keyed per variable in a `BTreeMap` over [`Condition`], so
/// every read walks conditions in ascending numeric order for free — the
/// ordering the chart sink requires. Aggregates are recomputed on every
/// read rather than maintained incrementally: trial counts are at most 3
/// and any slot can be edited at any time, so recompute-on-read avoids the
/// out-of-order-edit bugs an incremental scheme invites.
#[derive(Debug)]
pub struct MeasurementStore {
    tables: HashMap<ExperimentVariable, BTreeMap<Condition, TrialSet>>,
    log: Vec<MeasurementLogEntry>,
}

impl MeasurementStore {
    /// Create an empty store with a table per experiment variable.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: ExperimentVariable::ALL
                .into_iter()
                .map(|v| (v, BTreeMap::new()))
                .collect(),
            log: Vec::new(),
        }
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty() && self.tables.values().all(BTreeMap::is_empty)
    }

    fn table(&self, variable: ExperimentVariable) -> &BTreeMap<Condition, TrialSet> {
        // Every variable's table is created in new()
        &self.tables[&variable]
    }

    fn table_mut(&mut self, variable: ExperimentVariable) -> &mut BTreeMap<Condition, TrialSet> {
        self.tables
            .get_mut(&variable)
            .unwrap_or_else(|| unreachable!("table missing for {variable:?}"))
    }

    /// Store a reading at one trial slot; `None` or NaN clears the slot.
    ///
    /// The condition's trial set is created lazily on first write and never
    /// deleted during the session.
    ///
    /// # Panics
    ///
    /// Panics if `trial_index >= 3` (caller contract violation).
    pub fn record_trial(
        &mut self,
        variable: ExperimentVariable,
        condition: Condition,
        trial_index: usize,
        value: Option<f64>,
    ) {
        trace!(
            variable = variable.key(),
            condition = condition.value(),
            trial_index,
            ?value,
            "record trial"
        );
        self.table_mut(variable)
            .entry(condition)
            .or_default()
            .set(trial_index, value);
    }

    /// Overwrite mode: replace all readings for a condition with one.
    ///
    /// Used when only a single timed reading exists per condition.
    pub fn record_single_reading(
        &mut self,
        variable: ExperimentVariable,
        condition: Condition,
        total_time_for_ten_swings: f64,
    ) {
        debug!(
            variable = variable.key(),
            condition = condition.value(),
            total_time_for_ten_swings,
            "record single reading"
        );
        self.table_mut(variable)
            .entry(condition)
            .or_default()
            .overwrite_single(total_time_for_ten_swings);
    }

    /// Ingest a validated boundary record.
    pub fn apply(&mut self, entry: TrialEntry) {
        self.record_trial(entry.variable, entry.condition, entry.trial_index, entry.value);
    }

    /// Derive the aggregate for one condition.
    ///
    /// A condition never recorded yields an all-absent reading, not an
    /// error — the table sink renders it as a row of `-` cells.
    #[must_use]
    pub fn aggregate(&self, variable: ExperimentVariable, condition: Condition) -> AggregateReading {
        self.table(variable)
            .get(&condition)
            .copied()
            .unwrap_or_default()
            .aggregate()
    }

    /// Chart feed: one point per condition with a defined period, in
    /// ascending numeric condition order.
    #[must_use]
    pub fn series_for(&self, variable: ExperimentVariable) -> Vec<SeriesPoint> {
        self.table(variable)
            .iter()
            .filter_map(|(condition, set)| {
                set.aggregate().period.map(|period| SeriesPoint {
                    condition: condition.value(),
                    label: condition.label(variable),
                    period,
                })
            })
            .collect()
    }

    /// The `(labels, values)` payload for the chart sink.
    #[must_use]
    pub fn chart_series_for(&self, variable: ExperimentVariable) -> ChartSeries {
        let points = self.series_for(variable);
        ChartSeries {
            name: variable.label().to_string(),
            labels: points.iter().map(|p| p.label.clone()).collect(),
            values: points.iter().map(|p| p.period).collect(),
        }
    }

    /// Table feed: one row per condition, in ascending numeric order.
    ///
    /// Covers the union of the variable's declared levels and any condition
    /// actually recorded, so the table always shows the full apparatus and
    /// never drops an off-schedule measurement.
    #[must_use]
    pub fn rows_for(&self, variable: ExperimentVariable) -> Vec<ConditionRow> {
        let mut conditions: BTreeSet<Condition> = variable
            .conditions()
            .iter()
            .filter_map(|&v| Condition::new(v))
            .collect();
        conditions.extend(self.table(variable).keys().copied());

        conditions
            .into_iter()
            .map(|condition| ConditionRow {
                condition: condition.value(),
                label: condition.label(variable),
                aggregate: self.aggregate(variable, condition),
            })
            .collect()
    }

    /// Append a stopwatch measurement to the auto-mode log.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogFull`] once the session holds 50 rows.
    pub fn record_log_entry(
        &mut self,
        length_cm: f64,
        weight_g: f64,
        amplitude_deg: f64,
        elapsed_seconds: f64,
    ) -> Result<&MeasurementLogEntry> {
        if self.log.len() >= LOG_CAPACITY {
            debug!(capacity = LOG_CAPACITY, "measurement log full");
            return Err(Error::LogFull {
                capacity: LOG_CAPACITY,
            });
        }

        let sequence = self.log.len() + 1;
        self.log.push(MeasurementLogEntry::new(
            sequence,
            length_cm,
            weight_g,
            amplitude_deg,
            elapsed_seconds,
        ));
        trace!(sequence, elapsed_seconds, "measurement logged");
        Ok(&self.log[sequence - 1])
    }

    /// All recorded measurement-log rows, in recording order.
    #[must_use]
    pub fn log(&self) -> &[MeasurementLogEntry] {
        &self.log
    }
}

impl Default for MeasurementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(v: f64) -> Condition {
        Condition::new(v).unwrap()
    }

    #[test]
    fn test_store_starts_empty() {
        let store = MeasurementStore::new();
        assert!(store.is_empty());
        assert!(store.series_for(ExperimentVariable::Length).is_empty());
    }

    #[test]
    fn test_aggregate_for_unrecorded_condition_is_absent() {
        let store = MeasurementStore::new();
        let agg = store.aggregate(ExperimentVariable::Weight, condition(20.0));
        assert!(agg.is_empty());
    }

    #[test]
    fn test_record_and_aggregate() {
        let mut store = MeasurementStore::new();
        store.record_trial(ExperimentVariable::Length, condition(100.0), 0, Some(20.0));
        store.record_trial(ExperimentVariable::Length, condition(100.0), 1, Some(20.2));

        let agg = store.aggregate(ExperimentVariable::Length, condition(100.0));
        assert!((agg.average.unwrap() - 20.1).abs() < 1e-9);
        assert!((agg.period.unwrap() - 2.01).abs() < 1e-9);
    }

    #[test]
    fn test_series_orders_numerically() {
        let mut store = MeasurementStore::new();
        // Recorded out of order; "100" sorts before "25" lexicographically
        store.record_trial(ExperimentVariable::Length, condition(200.0), 0, Some(28.4));
        store.record_trial(ExperimentVariable::Length, condition(25.0), 0, Some(10.0));
        store.record_trial(ExperimentVariable::Length, condition(100.0), 0, Some(20.1));

        let series = store.series_for(ExperimentVariable::Length);
        let order: Vec<f64> = series.iter().map(|p| p.condition).collect();
        assert_eq!(order, vec![25.0, 100.0, 200.0]);
    }

    #[test]
    fn test_series_skips_conditions_without_period() {
        let mut store = MeasurementStore::new();
        store.record_trial(ExperimentVariable::Amplitude, condition(10.0), 0, Some(14.2));
        store.record_trial(ExperimentVariable::Amplitude, condition(20.0), 0, Some(-1.0));

        let series = store.series_for(ExperimentVariable::Amplitude);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "10°");
    }

    #[test]
    fn test_chart_series_payload() {
        let mut store = MeasurementStore::new();
        store.record_trial(ExperimentVariable::Length, condition(100.0), 0, Some(20.1));

        let chart = store.chart_series_for(ExperimentVariable::Length);
        assert_eq!(chart.name, "Pendulum length");
        assert_eq!(chart.labels, vec!["100cm".to_string()]);
        assert!((chart.values[0] - 2.01).abs() < 1e-9);
    }

    #[test]
    fn test_rows_cover_declared_conditions() {
        let store = MeasurementStore::new();
        let rows = store.rows_for(ExperimentVariable::Length);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.aggregate.is_empty()));
        assert_eq!(rows[0].label, "25cm");
        assert_eq!(rows[3].label, "200cm");
    }

    #[test]
    fn test_rows_include_off_schedule_condition() {
        let mut store = MeasurementStore::new();
        store.record_trial(ExperimentVariable::Length, condition(75.0), 0, Some(17.4));

        let rows = store.rows_for(ExperimentVariable::Length);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].label, "75cm");
    }

    #[test]
    fn test_single_reading_overwrites_trials() {
        let mut store = MeasurementStore::new();
        store.record_trial(ExperimentVariable::Weight, condition(20.0), 0, Some(14.0));
        store.record_trial(ExperimentVariable::Weight, condition(20.0), 2, Some(14.4));

        store.record_single_reading(ExperimentVariable::Weight, condition(20.0), 15.0);

        let agg = store.aggregate(ExperimentVariable::Weight, condition(20.0));
        assert_eq!(agg.readings, [Some(15.0), None, None]);
        assert_eq!(agg.average, Some(15.0));
    }

    #[test]
    fn test_apply_boundary_entry() {
        let mut store = MeasurementStore::new();
        let entry = TrialEntry::parse("amplitude", "30", "0", "14.2").unwrap();
        store.apply(entry);

        let agg = store.aggregate(ExperimentVariable::Amplitude, condition(30.0));
        assert_eq!(agg.period, Some(1.42));
    }

    #[test]
    fn test_log_caps_at_fifty() {
        let mut store = MeasurementStore::new();
        for _ in 0..LOG_CAPACITY {
            store.record_log_entry(100.0, 20.0, 10.0, 14.2).unwrap();
        }

        let err = store.record_log_entry(100.0, 20.0, 10.0, 14.2).unwrap_err();
        assert!(matches!(err, Error::LogFull { capacity: 50 }));
        assert_eq!(store.log().len(), LOG_CAPACITY);
        assert_eq!(store.log()[49].sequence(), 50);
    }
}
