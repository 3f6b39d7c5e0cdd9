//! WebAssembly bindings for the browser teaching aid.
//!
//! Exposes one JavaScript-visible bench object wrapping a [`LabSession`] on
//! the `performance.now()` clock. The page's event handlers call straight
//! through: input events feed `record_trial`, the animation loop calls
//! `pump` and reads the angle for the render surface, chart/table redraws
//! pull their payloads as plain JS values.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::experiment::{Condition, ExperimentVariable, TrialEntry};
use crate::simulation::SimulationParameters;
use crate::stopwatch::format_elapsed;
use crate::LabSession;

/// Initialize WASM module with panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"pendulum-lab WASM initialized".into());
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_variable(key: &str) -> Result<ExperimentVariable, JsValue> {
    ExperimentVariable::from_key(key)
        .ok_or_else(|| JsValue::from_str(&format!("unknown variable key: {key}")))
}

fn parse_condition(value: f64) -> Result<Condition, JsValue> {
    Condition::new(value).ok_or_else(|| JsValue::from_str("condition must be finite"))
}

/// The in-browser lab bench: store, stopwatch, and animator in one handle.
#[wasm_bindgen]
pub struct LabBench {
    session: LabSession,
    /// Latest simulated angle, written by the frame callback.
    angle: Rc<Cell<f64>>,
}

#[wasm_bindgen]
impl LabBench {
    /// Create a fresh session for the page.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console::log_1(&"LabBench created".into());
        Self {
            session: LabSession::builder().build(),
            angle: Rc::new(Cell::new(0.0)),
        }
    }

    /// Display metadata the page needs to build forms and sliders:
    /// `{key, label, unit, color, conditions, sliderStep}`.
    pub fn variable_meta(&self, variable: &str) -> Result<JsValue, JsValue> {
        let v = parse_variable(variable)?;
        let meta = serde_json::json!({
            "key": v.key(),
            "label": v.label(),
            "unit": v.unit(),
            "color": v.color(),
            "conditions": v.conditions(),
            "sliderStep": v.slider_step(),
        });
        serde_wasm_bindgen::to_value(&meta).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Ingest one input event from the three-trial form.
    ///
    /// Arguments are the raw dataset strings off the event target; a
    /// non-numeric `value` clears the slot.
    pub fn record_trial(
        &mut self,
        variable: &str,
        condition: &str,
        trial: &str,
        value: &str,
    ) -> Result<(), JsValue> {
        let entry = TrialEntry::parse(variable, condition, trial, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.store_mut().apply(entry);
        Ok(())
    }

    /// Overwrite mode: one timed reading for a condition.
    pub fn record_single_reading(
        &mut self,
        variable: &str,
        condition: f64,
        total_time_for_ten_swings: f64,
    ) -> Result<(), JsValue> {
        let variable = parse_variable(variable)?;
        let condition = parse_condition(condition)?;
        self.session
            .store_mut()
            .record_single_reading(variable, condition, total_time_for_ten_swings);
        Ok(())
    }

    /// Chart-sink payload for a variable: `{name, labels, values}`.
    pub fn chart_series(&self, variable: &str) -> Result<JsValue, JsValue> {
        let variable = parse_variable(variable)?;
        let series = self.session.store().chart_series_for(variable);
        serde_wasm_bindgen::to_value(&series).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Table-sink rows for a variable.
    pub fn table_rows(&self, variable: &str) -> Result<JsValue, JsValue> {
        let variable = parse_variable(variable)?;
        let rows = self.session.store().rows_for(variable);
        serde_wasm_bindgen::to_value(&rows).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Start (or resume) the stopwatch.
    pub fn stopwatch_start(&mut self) {
        self.session.stopwatch_mut().start();
    }

    /// Stop the stopwatch.
    pub fn stopwatch_stop(&mut self) {
        self.session.stopwatch_mut().stop();
    }

    /// Reset the stopwatch (no-op unless stopped).
    pub fn stopwatch_reset(&mut self) {
        self.session.stopwatch_mut().reset();
    }

    /// Current display string, `MM:SS.CC`.
    #[must_use]
    pub fn stopwatch_display(&self) -> String {
        format_elapsed(self.session.stopwatch().elapsed_millis())
    }

    /// Record the stopped reading with the current slider values.
    ///
    /// Returns the new log row, or `null` when the stopwatch is not stopped.
    pub fn record_measurement(
        &mut self,
        length_cm: f64,
        weight_g: f64,
        amplitude_deg: f64,
    ) -> Result<JsValue, JsValue> {
        match self
            .session
            .record_stopwatch_measurement(length_cm, weight_g, amplitude_deg)
        {
            Ok(Some(entry)) => {
                serde_wasm_bindgen::to_value(entry).map_err(|e| JsValue::from_str(&e.to_string()))
            }
            Ok(None) => Ok(JsValue::NULL),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    /// All measurement-log rows.
    pub fn measurement_log(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.store().log())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Start a simulation run; any in-flight run is cancelled first.
    pub fn start_simulation(&mut self, length_cm: f64, amplitude_deg: f64) -> Result<(), JsValue> {
        let params = SimulationParameters::new(length_cm, amplitude_deg)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let angle = self.angle.clone();
        angle.set(params.angle_at(0.0));
        self.session
            .animator_mut()
            .start(params, move |a, _| angle.set(a));
        Ok(())
    }

    /// Cancel the in-flight simulation run, if any.
    pub fn cancel_simulation(&mut self) {
        self.session.animator_mut().cancel();
    }

    /// Whether a simulation run is in flight.
    #[must_use]
    pub fn simulation_running(&self) -> bool {
        self.session.animator().is_running()
    }

    /// Drive the cooperative loop: stopwatch sample plus animation frame.
    ///
    /// The page calls this from `requestAnimationFrame`.
    pub fn pump(&mut self) {
        self.session.pump();
    }

    /// Latest simulated angle in radians, for the render surface.
    #[must_use]
    pub fn simulation_angle(&self) -> f64 {
        self.angle.get()
    }
}

impl Default for LabBench {
    fn default() -> Self {
        Self::new()
    }
}
