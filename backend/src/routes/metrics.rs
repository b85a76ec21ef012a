//! Health metrics API routes

use crate::error::{ApiError, ApiResult};
use crate::services::HealthMetricsService;
use crate::state::AppState;
use aahar_shared::types::{MetricsOptions, MetricsRequest, MetricsResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

/// Create metrics routes
pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate_metrics))
        .route("/options", get(get_options))
}

/// POST /api/v1/metrics - Calculate BMI, BMR and daily calories
async fn calculate_metrics(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> ApiResult<Json<MetricsResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let response = HealthMetricsService::calculate(state.limits(), &req)?;
    Ok(Json(response))
}

/// GET /api/v1/metrics/options - Accepted values and form defaults
async fn get_options() -> Json<MetricsOptions> {
    Json(MetricsOptions::default())
}
