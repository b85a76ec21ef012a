//! Aahar WASM Module
//!
//! This crate provides WebAssembly bindings so the browser front end can run
//! the health metrics calculator locally, plus the page navigation state the
//! front end switches between.

use aahar_shared::types::MetricsResponse;
use aahar_shared::{classify_bmi, compute};
use wasm_bindgen::prelude::*;

/// Page shown by the front end
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Calculator,
}

/// Navigation state owned by the front end
///
/// The calculator never sees this; pages only decide when to call it.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Navigator {
    view: View,
}

#[wasm_bindgen]
impl Navigator {
    /// Start on the landing page
    #[wasm_bindgen(constructor)]
    pub fn new() -> Navigator {
        Navigator { view: View::Home }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn open_calculator(&mut self) {
        self.view = View::Calculator;
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
    }

    pub fn is_calculator(&self) -> bool {
        self.view == View::Calculator
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate BMI, BMR and daily calories, returned as a JSON object string
///
/// Errors carry a user-facing message such as "Gender: invalid gender ...".
#[wasm_bindgen]
pub fn calculate_health_metrics(
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<String, JsError> {
    metrics_json(weight_kg, height_cm, age, gender, activity_level, goal).map_err(|msg| JsError::new(&msg))
}

/// Display label for a BMI value
#[wasm_bindgen]
pub fn bmi_category_label(bmi: f64) -> String {
    classify_bmi(bmi).label().to_string()
}

fn metrics_json(
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<String, String> {
    let metrics = compute(weight_kg, height_cm, age, gender, activity_level, goal)
        .map_err(|e| e.user_message())?;
    serde_json::to_string(&MetricsResponse::from(metrics)).map_err(|e| e.to_string())
}
