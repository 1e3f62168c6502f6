use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The service holds no state, so it is healthy while it answers.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Readiness probe for orchestrators. There are no dependencies to wait on.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}
