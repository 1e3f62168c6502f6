use axum::{http::StatusCode, Json};

use crate::models::{NotificationPayload, SendNotificationResponse};
use crate::services::record_notification;

/// Log the notification request and echo it back. Nothing is delivered.
///
/// Always answers 200: bodies that are missing, malformed or not a JSON
/// object are echoed as `{}`.
#[tracing::instrument(skip_all)]
pub async fn send_notification(
    payload: NotificationPayload,
) -> (StatusCode, Json<SendNotificationResponse>) {
    let kind = payload.kind();
    tracing::info!(payload = %payload, kind, "Notification received");
    record_notification(kind);

    (StatusCode::OK, Json(SendNotificationResponse::from(payload)))
}
