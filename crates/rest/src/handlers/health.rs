//! Health check handlers.

use axum::{Json, http::StatusCode, response::IntoResponse};

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Liveness probe; always returns 200 once the process is up.
pub async fn liveness_handler() -> StatusCode {
    StatusCode::OK
}
