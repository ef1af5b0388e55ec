use prometheus::{
    CounterVec, Encoder, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to register metric: {0}")]
    Registration(#[from] prometheus::Error),
    #[error("Failed to encode metrics: {0}")]
    Encoding(String),
}

/// Prometheus metrics for the catalog service
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    // HTTP metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub http_requests_in_flight: GaugeVec,

    // Store metrics
    pub store_operations_total: CounterVec,
    pub contact_submissions_total: CounterVec,
}

impl Metrics {
    /// Create a new metrics instance with all metrics registered on a private registry
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        info!("Initializing Prometheus metrics");

        let http_requests_total = CounterVec::new(
            Opts::new(
                "http_requests_total",
                "Total number of HTTP requests processed",
            ),
            &["method", "endpoint", "status_code"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
            ]),
            &["method", "endpoint"],
        )?;

        let http_requests_in_flight = GaugeVec::new(
            Opts::new(
                "http_requests_in_flight",
                "Number of HTTP requests currently being processed",
            ),
            &["method", "endpoint"],
        )?;

        let store_operations_total = CounterVec::new(
            Opts::new(
                "store_operations_total",
                "Total number of store operations invoked by the API",
            ),
            &["operation", "entity", "status"],
        )?;

        let contact_submissions_total = CounterVec::new(
            Opts::new(
                "contact_submissions_total",
                "Contact form submissions by outcome",
            ),
            &["status"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(store_operations_total.clone()))?;
        registry.register(Box::new(contact_submissions_total.clone()))?;

        info!("Prometheus metrics initialized successfully");

        Ok(Metrics {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            store_operations_total,
            contact_submissions_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encode all metrics in Prometheus text format
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::Encoding(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| MetricsError::Encoding(e.to_string()))
    }

    /// Record HTTP request metrics
    pub fn record_http_request(
        &self,
        method: &str,
        endpoint: &str,
        status_code: u16,
        duration_seconds: f64,
    ) {
        let status_str = status_code.to_string();

        self.http_requests_total
            .with_label_values(&[method, endpoint, &status_str])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, endpoint])
            .observe(duration_seconds);
    }

    /// Record the outcome of a store call
    pub fn record_store_operation(&self, operation: &str, entity: &str, success: bool) {
        let status = if success { "success" } else { "error" };

        self.store_operations_total
            .with_label_values(&[operation, entity, status])
            .inc();
    }

    /// Record a contact submission outcome: "accepted", "rejected" or "failed"
    pub fn record_contact_submission(&self, status: &str) {
        self.contact_submissions_total
            .with_label_values(&[status])
            .inc();
    }

    pub fn increment_in_flight(&self, method: &str, endpoint: &str) {
        self.http_requests_in_flight
            .with_label_values(&[method, endpoint])
            .inc();
    }

    pub fn decrement_in_flight(&self, method: &str, endpoint: &str) {
        self.http_requests_in_flight
            .with_label_values(&[method, endpoint])
            .dec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        assert!(Metrics::new().is_ok());
    }

    #[test]
    fn test_instances_use_separate_registries() {
        let first = Metrics::new().unwrap();
        let second = Metrics::new().unwrap();

        first.record_contact_submission("accepted");

        let encoded = second.encode().unwrap();
        assert!(!encoded.contains("status=\"accepted\""));
    }

    #[test]
    fn test_http_request_recording() {
        let metrics = Metrics::new().unwrap();

        metrics.record_http_request("GET", "/api/packages", 200, 0.012);
        metrics.record_http_request("POST", "/api/contact", 400, 0.003);

        let metrics_text = metrics.encode().unwrap();
        assert!(metrics_text.contains("http_requests_total"));
        assert!(metrics_text.contains("http_request_duration_seconds"));
        assert!(metrics_text.contains("endpoint=\"/api/contact\""));
    }

    #[test]
    fn test_store_metrics_recording() {
        let metrics = Metrics::new().unwrap();

        metrics.record_store_operation("get_all", "package", true);
        metrics.record_store_operation("get", "package", false);
        metrics.record_contact_submission("rejected");

        let encoded = metrics.encode().unwrap();
        assert!(encoded.contains("store_operations_total"));
        assert!(encoded.contains("status=\"error\""));
        assert!(encoded.contains("contact_submissions_total"));
    }

    #[test]
    fn test_in_flight_requests() {
        let metrics = Metrics::new().unwrap();

        metrics.increment_in_flight("GET", "/api/gallery");
        metrics.increment_in_flight("GET", "/api/gallery");
        metrics.decrement_in_flight("GET", "/api/gallery");

        let value = metrics
            .http_requests_in_flight
            .with_label_values(&["GET", "/api/gallery"])
            .get();
        assert_eq!(value, 1.0);
    }
}
