//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, resource, status
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!   with the same labels

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics listener started"),
        Err(error) => tracing::error!(%error, "failed to install metrics recorder"),
    }
}

/// Record one completed inbound request.
pub fn record_request(method: &str, status: u16, resource: &str, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "resource" => resource.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "gateway_request_duration_seconds",
        "method" => method.to_string(),
        "resource" => resource.to_string(),
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
