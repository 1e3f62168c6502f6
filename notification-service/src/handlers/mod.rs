//! HTTP handlers for notification-service.

pub mod health;
pub mod metrics;
pub mod root;
pub mod send;

pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_endpoint;
pub use root::{index, ROOT_MESSAGE};
pub use send::send_notification;
