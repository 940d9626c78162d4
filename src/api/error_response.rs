//! HTTP error response handling for the API
//!
//! Converts pipeline errors to HTTP responses with the appropriate
//! status code and a JSON error body.

use crate::errors::AppError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;

/// Convert pipeline errors to HTTP responses. Validation failures map
/// to 400, everything else to 500 with a human-readable message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
