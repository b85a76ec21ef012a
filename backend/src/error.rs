//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use aahar_shared::types::{ErrorDetail, ErrorResponse};
use aahar_shared::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Out of range: {message}")]
    OutOfRange { field: &'static str, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::OutOfRange { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "OUT_OF_RANGE"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }

    fn detail(&self) -> ErrorDetail {
        let (_, code) = self.status_and_code();
        let (message, field, details) = match self {
            ApiError::Validation(err) => (
                err.to_string(),
                Some(err.field().to_string()),
                err.allowed()
                    .map(|allowed| serde_json::json!({ "allowed": allowed })),
            ),
            ApiError::OutOfRange { field, message } => {
                (message.clone(), Some(field.to_string()), None)
            }
            ApiError::BadRequest(msg) => (msg.clone(), None, None),
        };

        ErrorDetail {
            code: code.to_string(),
            message,
            field,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = Json(ErrorResponse {
            error: self.detail(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
