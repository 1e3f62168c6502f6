mod common;

use common::TestApp;
use notification_service::config::{NotificationConfig, ServiceConfig};
use notification_service::handlers::ROOT_MESSAGE;
use notification_service::startup::Application;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;

// =============================================================================
// Root & Health
// =============================================================================

#[tokio::test]
async fn root_reports_service_running() {
    let app = TestApp::spawn().await;

    for _ in 0..3 {
        let response = app
            .client
            .get(&app.address)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({"message": ROOT_MESSAGE}));
        assert_eq!(body["message"], "Notification Service is running!");
    }
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .starts_with("application/json"));

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

// =============================================================================
// Send
// =============================================================================

#[tokio::test]
async fn send_echoes_object_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post_send(Some(r#"{"to": "alice@example.com", "text": "hi"}"#))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"ok": true, "received": {"to": "alice@example.com", "text": "hi"}})
    );
}

#[tokio::test]
async fn send_without_body_echoes_empty_object() {
    let app = TestApp::spawn().await;

    let response = app.post_send(None).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"ok": true, "received": {}}));
}

#[tokio::test]
async fn send_with_malformed_body_still_succeeds() {
    let app = TestApp::spawn().await;

    for raw in ["{not json", "", "]]", "to=alice"] {
        let response = app.post_send(Some(raw)).await;

        assert_eq!(response.status().as_u16(), 200, "body: {:?}", raw);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({"ok": true, "received": {}}), "body: {:?}", raw);
    }
}

#[tokio::test]
async fn send_discards_non_object_json() {
    let app = TestApp::spawn().await;

    for raw in ["[1, 2]", "\"hello\"", "7", "null"] {
        let response = app.post_send(Some(raw)).await;

        assert_eq!(response.status().as_u16(), 200, "body: {:?}", raw);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({"ok": true, "received": {}}), "body: {:?}", raw);
    }
}

#[tokio::test]
async fn send_treats_non_json_content_type_as_empty() {
    let app = TestApp::spawn().await;

    for content_type in ["text/plain", "application/x-www-form-urlencoded"] {
        let response = app
            .client
            .post(format!("{}/send", app.address))
            .header("content-type", content_type)
            .body(r#"{"channel": "sms"}"#)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200, "content type: {}", content_type);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(
            body,
            json!({"ok": true, "received": {}}),
            "content type: {}",
            content_type
        );
    }
}

#[tokio::test]
async fn send_without_content_type_is_empty() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/send", app.address))
        .body(r#"{"channel": "sms"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"ok": true, "received": {}}));
}

#[tokio::test]
async fn send_accepts_json_subtypes() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/send", app.address))
        .header("content-type", "application/cloudevents+json; charset=utf-8")
        .body(r#"{"channel": "sms"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"ok": true, "received": {"channel": "sms"}}));
}

// =============================================================================
// Framework defaults
// =============================================================================

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/nonexistent", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn wrong_method_on_send_is_rejected_by_router() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/send", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 405);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

// =============================================================================
// Startup
// =============================================================================

#[tokio::test]
async fn startup_fails_when_port_is_taken() {
    let held = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind holder listener");
    let port = held.local_addr().expect("Missing local address").port();

    let config = NotificationConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port,
        },
        service: ServiceConfig::default(),
    };

    let result = Application::build(config).await;
    assert!(matches!(result, Err(AppError::InternalError(_))));

    drop(held);
}
