use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Body of a `POST /send` request.
///
/// Only JSON objects sent with a JSON content type are kept. A missing body,
/// a non-JSON content type, invalid JSON, or any other JSON value (array,
/// string, number, bool, null) is `Other` and echoes back as `{}`.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationPayload {
    Object(Map<String, Value>),
    Other,
}

impl NotificationPayload {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => NotificationPayload::Object(map),
            _ => NotificationPayload::Other,
        }
    }

    /// Metrics label for the payload shape.
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationPayload::Object(_) => "object",
            NotificationPayload::Other => "other",
        }
    }

    pub fn into_received(self) -> Map<String, Value> {
        match self {
            NotificationPayload::Object(map) => map,
            NotificationPayload::Other => Map::new(),
        }
    }
}

impl std::fmt::Display for NotificationPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationPayload::Object(map) => {
                let json = serde_json::to_string(map).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
            NotificationPayload::Other => f.write_str("{}"),
        }
    }
}

/// `application/json` or any `application/*+json` subtype, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Never rejects: a body that is not declared as JSON, or that cannot be read,
/// is treated like a missing one.
#[axum::async_trait]
impl<S> FromRequest<S> for NotificationPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            tracing::debug!("Notification body is not declared as JSON, treating as empty");
            return Ok(NotificationPayload::Other);
        }

        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(NotificationPayload::from_bytes(&bytes)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable notification body, treating as empty");
                Ok(NotificationPayload::Other)
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendNotificationResponse {
    pub ok: bool,
    pub received: Map<String, Value>,
}

impl From<NotificationPayload> for SendNotificationResponse {
    fn from(payload: NotificationPayload) -> Self {
        Self {
            ok: true,
            received: payload.into_received(),
        }
    }
}
