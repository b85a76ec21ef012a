//! Health metrics service - runs the calculator for HTTP callers

use crate::config::InputLimits;
use crate::error::ApiError;
use aahar_shared::health_metrics::{calculate_health_metrics, HealthInputs};
use aahar_shared::types::{MetricsRequest, MetricsResponse};
use tracing::{debug, info};

/// Health metrics service
pub struct HealthMetricsService;

impl HealthMetricsService {
    /// Validate a request, apply the form bounds and compute the metrics
    ///
    /// The calculator's own validation runs first, so a non-positive weight
    /// is reported as a validation error rather than as out of range.
    pub fn calculate(limits: &InputLimits, req: &MetricsRequest) -> Result<MetricsResponse, ApiError> {
        let inputs = HealthInputs::parse(
            req.weight_kg,
            req.height_cm,
            req.age,
            &req.gender,
            &req.activity_level,
            &req.goal,
        )
        .map_err(|e| {
            info!(field = e.field(), error = %e, "Rejected health metrics request");
            ApiError::from(e)
        })?;

        Self::check_limits(limits, &inputs)?;

        let metrics = calculate_health_metrics(&inputs).map_err(|e| {
            info!(field = e.field(), error = %e, "Health metrics out of numeric range");
            ApiError::from(e)
        })?;
        debug!(
            gender = %inputs.gender(),
            activity_level = %inputs.activity_level(),
            goal = %inputs.goal(),
            bmi = metrics.bmi,
            bmr = metrics.bmr,
            daily_calories = metrics.daily_calories,
            "Computed health metrics"
        );

        Ok(MetricsResponse::from(metrics))
    }

    /// Check validated inputs against the configured form bounds
    pub fn check_limits(limits: &InputLimits, inputs: &HealthInputs) -> Result<(), ApiError> {
        Self::check_range(
            "weight_kg",
            inputs.weight_kg(),
            limits.min_weight_kg,
            limits.max_weight_kg,
            "kg",
        )?;
        Self::check_range(
            "height_cm",
            inputs.height_cm(),
            limits.min_height_cm,
            limits.max_height_cm,
            "cm",
        )?;
        Self::check_range(
            "age",
            f64::from(inputs.age()),
            f64::from(limits.min_age),
            f64::from(limits.max_age),
            "years",
        )
    }

    fn check_range(field: &'static str, value: f64, min: f64, max: f64, unit: &str) -> Result<(), ApiError> {
        if value < min || value > max {
            info!(field, value, min, max, "Input outside configured bounds");
            return Err(ApiError::OutOfRange {
                field,
                message: format!("{} must be between {} and {} {}, got {}", field, min, max, unit, value),
            });
        }
        Ok(())
    }
}
