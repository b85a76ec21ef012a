//! Browser-side tests for the exported bindings
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use aahar_wasm::{calculate_health_metrics, Navigator, View};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn calculate_returns_json() {
    let json = calculate_health_metrics(70.0, 175.0, 30, "male", "moderate", "maintenance")
        .ok()
        .expect("valid inputs should compute");
    assert!(json.contains("\"bmi\":22.86"));
    assert!(json.contains("\"bmr\":1673.75"));
}

#[wasm_bindgen_test]
fn calculate_rejects_invalid_goal() {
    assert!(calculate_health_metrics(70.0, 175.0, 30, "male", "moderate", "bulk").is_err());
}

#[wasm_bindgen_test]
fn navigator_round_trip() {
    let mut nav = Navigator::new();
    nav.open_calculator();
    assert_eq!(nav.view(), View::Calculator);
    nav.go_home();
    assert_eq!(nav.view(), View::Home);
}
