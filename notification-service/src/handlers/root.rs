use axum::{response::IntoResponse, Json};
use serde_json::json;

pub const ROOT_MESSAGE: &str = "Notification Service is running!";

pub async fn index() -> impl IntoResponse {
    Json(json!({ "message": ROOT_MESSAGE }))
}
