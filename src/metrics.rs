use axum::response::IntoResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    /// Total number of property requests served, by response status
    pub static ref REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "sysprops_requests_total",
        "Total number of property requests served",
        &["status"]
    )
    .unwrap();

    /// Time needed to assemble the property map
    pub static ref REQUEST_DURATION: Histogram = register_histogram!(
        "sysprops_request_duration_seconds",
        "Time needed to assemble the property map",
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .unwrap();

    /// Secret value fetches that failed and were substituted with "null"
    pub static ref SECRET_FETCH_FAILURES: IntCounter = register_int_counter!(
        "sysprops_secret_fetch_failures_total",
        "Total number of secret value fetches that failed and were substituted"
    )
    .unwrap();
}

/// Export metrics in Prometheus text format
pub fn export_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Metrics handler for /metrics endpoint
pub async fn metrics_handler() -> axum::response::Response {
    match export_metrics() {
        Ok(metrics) => (
            axum::http::StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4",
            )],
            metrics,
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to export metrics: {}", e),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_includes_registered_metrics() {
        REQUESTS_TOTAL.with_label_values(&["200"]).inc();
        let text = export_metrics().unwrap();
        assert!(text.contains("sysprops_requests_total"));
    }
}
