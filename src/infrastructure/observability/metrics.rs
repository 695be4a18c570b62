//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;

/// Shared handle behind the scrape endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Renders the current scrape payload
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Installs the Prometheus recorder and seeds the build info gauge
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!("Failed to install Prometheus recorder: {}", e);
            return None;
        }
    };

    gauge!("club_server_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

    tracing::info!(path = %config.path, "Prometheus metrics initialized");

    Some(PrometheusMetrics {
        handle: Arc::new(handle),
    })
}

/// Builds the router serving the scrape endpoint
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Records one request against the HTTP counters and latency histogram
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let status_str = status.to_string();
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status_str),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    // 5xx responses get their own counter
    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record the outcome of a club join attempt
pub fn record_join_attempt(outcome: &str) {
    let labels = [("outcome", outcome.to_string())];

    counter!("membership_join_total", &labels).increment(1);
}

/// Record the outcome of a club leave request
pub fn record_leave(found: bool) {
    let outcome = if found { "left" } else { "not_found" };
    let labels = [("outcome", outcome.to_string())];

    counter!("membership_leave_total", &labels).increment(1);
}

/// Collapses request-specific path segments so label cardinality stays
/// bounded. Entity ids are UUIDs and the only numeric segment is a list
/// page index.
fn sanitize_path(path: &str) -> String {
    let path = regex::Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .unwrap()
        .replace_all(path, "{id}");

    let path = regex::Regex::new(r"/list/\d+$")
        .unwrap()
        .replace_all(&path, "/list/{page}");

    path.chars().take(50).collect()
}
