//! Metrics collection for notification-service.
//!
//! HTTP request metrics go through the `metrics` facade and are rendered by the
//! Prometheus exporter. Notification counters live in a dedicated registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::{Once, OnceLock};

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static NOTIFICATION_RECEIVED_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

static INIT: Once = Once::new();

/// Initialize metrics collection. Safe to call more than once.
pub fn init_metrics() {
    INIT.call_once(|| {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                let _ = METRICS_HANDLE.set(handle);
            }
            Err(e) => tracing::warn!("Failed to install Prometheus recorder: {}", e),
        }

        match build_registry() {
            Ok((registry, received)) => {
                let _ = PROMETHEUS_REGISTRY.set(registry);
                let _ = NOTIFICATION_RECEIVED_TOTAL.set(received);
            }
            Err(e) => tracing::warn!("Failed to register notification metrics: {}", e),
        }
    });
}

fn build_registry() -> Result<(Registry, IntCounterVec), prometheus::Error> {
    let registry = Registry::new();

    let received = IntCounterVec::new(
        Opts::new(
            "notification_received_total",
            "Total notification requests received, by payload kind",
        ),
        &["kind"],
    )?;
    registry.register(Box::new(received.clone()))?;

    Ok((registry, received))
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Count a received notification request.
pub fn record_notification(kind: &str) {
    if let Some(counter) = NOTIFICATION_RECEIVED_TOTAL.get() {
        counter.with_label_values(&[kind]).inc();
    }
}
