//! API request and response types

use crate::errors::ValidationError;
use crate::health_metrics::{classify_bmi, compute, HealthMetrics};
use crate::validation::{VALID_ACTIVITY_LEVELS, VALID_GENDERS, VALID_GOALS};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Health Metrics Types
// ============================================================================

/// Health metrics calculation request
///
/// Enumerated fields stay raw strings here; they are matched
/// case-insensitively when the request is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
}

impl Default for MetricsRequest {
    /// Initial values of the calculator form
    fn default() -> Self {
        Self {
            weight_kg: 64.0,
            height_cm: 180.0,
            age: 19,
            gender: "male".to_string(),
            activity_level: "sedentary".to_string(),
            goal: "weight loss".to_string(),
        }
    }
}

impl MetricsRequest {
    /// Validate and run the calculation
    pub fn compute(&self) -> Result<HealthMetrics, ValidationError> {
        compute(
            self.weight_kg,
            self.height_cm,
            self.age,
            &self.gender,
            &self.activity_level,
            &self.goal,
        )
    }
}

/// Health metrics response, with the BMI label the calculator displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub bmi: f64,
    /// kcal/day
    pub bmr: f64,
    /// kcal/day
    pub daily_calories: f64,
    pub bmi_category: String,
}

impl From<HealthMetrics> for MetricsResponse {
    fn from(metrics: HealthMetrics) -> Self {
        Self {
            bmi: metrics.bmi,
            bmr: metrics.bmr,
            daily_calories: metrics.daily_calories,
            bmi_category: classify_bmi(metrics.bmi).label().to_string(),
        }
    }
}

/// Accepted values for every enumerated input, plus the form defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsOptions {
    pub genders: Vec<String>,
    pub activity_levels: Vec<String>,
    pub goals: Vec<String>,
    pub defaults: MetricsRequest,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            genders: owned(VALID_GENDERS),
            activity_levels: owned(VALID_ACTIVITY_LEVELS),
            goals: owned(VALID_GOALS),
            defaults: MetricsRequest::default(),
        }
    }
}
