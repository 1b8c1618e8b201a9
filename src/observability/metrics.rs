//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pay_bridge_requests_total{outcome}` (counter): bridge requests by
//!   outcome (`redirect`, `missing_target`, `malformed_target`)
//!
//! Recording is a no-op until a recorder is installed, so handlers can
//! record unconditionally.

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "pay_bridge_requests_total";

/// Install the Prometheus recorder with its own HTTP listener on `addr`.
///
/// Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    describe_counter!(REQUESTS_TOTAL, "Total bridge requests by outcome");
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one bridge request.
pub fn record_bridge(outcome: &'static str) {
    counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
}
