use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::trace::TraceContextExt;
use std::{future::Future, sync::Arc, time::Instant};
use tracing::{error, info, instrument, warn, Instrument};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use super::Metrics;

/// Middleware for request tracing and HTTP metrics
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // Group metrics by route template so ids do not explode label cardinality
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let span_name = format!("{} {}", method, endpoint);
    let span = tracing::info_span!(
        target: "yatra_rs::http",
        "http_request",
        otel.name = %span_name,
        otel.kind = "server",
        http.method = %method,
        http.route = %endpoint,
        http.url = %uri,
        http.user_agent = %user_agent,
        http.status_code = tracing::field::Empty,
        http.response_time_ms = tracing::field::Empty,
    );

    async {
        metrics.increment_in_flight(&method, &endpoint);
        info!(method = %method, path = %uri, "Processing request");

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let status_code = response.status().as_u16();

        let current_span = tracing::Span::current();
        current_span.record("http.status_code", status_code);
        current_span.record("http.response_time_ms", duration.as_millis() as u64);

        let context = current_span.context();
        let otel_span = context.span();
        if status_code >= 500 {
            otel_span.set_status(opentelemetry::trace::Status::error("HTTP server error"));
        } else {
            otel_span.set_status(opentelemetry::trace::Status::Ok);
        }

        metrics.record_http_request(&method, &endpoint, status_code, duration.as_secs_f64());
        metrics.decrement_in_flight(&method, &endpoint);

        if status_code >= 500 {
            error!(
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration.as_millis() as u64,
                "Request failed"
            );
        } else if status_code >= 400 {
            warn!(
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration.as_millis() as u64,
                "Request rejected"
            );
        } else {
            info!(
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration.as_millis() as u64,
                "Request completed"
            );
        }

        response
    }
    .instrument(span)
    .await
}

/// Wraps store calls made by handlers with a span and outcome metrics
#[derive(Clone)]
pub struct StoreTracer {
    metrics: Arc<Metrics>,
}

impl StoreTracer {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Trace a store operation, recording success or failure
    #[instrument(skip_all, fields(operation = %operation, entity = %entity))]
    pub async fn trace<F, T, E>(&self, operation: &str, entity: &str, future: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let start_time = Instant::now();

        match future.await {
            Ok(result) => {
                self.metrics.record_store_operation(operation, entity, true);
                tracing::debug!(
                    duration_us = start_time.elapsed().as_micros() as u64,
                    "Store operation completed"
                );
                Ok(result)
            }
            Err(error) => {
                self.metrics.record_store_operation(operation, entity, false);
                error!(
                    error = %error,
                    duration_us = start_time.elapsed().as_micros() as u64,
                    "Store operation failed"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StorageError;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_store_tracer_records_outcomes() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let tracer = StoreTracer::new(metrics.clone());

        let ok: Result<u32, StorageError> = tracer.trace("get_all", "package", async { Ok(3) }).await;
        assert_eq!(ok.unwrap(), 3);

        let err: Result<u32, StorageError> = tracer
            .trace("get", "package", async {
                Err(StorageError::Unavailable {
                    message: "down".to_string(),
                })
            })
            .await;
        assert!(err.is_err());

        let success = metrics
            .store_operations_total
            .with_label_values(&["get_all", "package", "success"])
            .get();
        let failure = metrics
            .store_operations_total
            .with_label_values(&["get", "package", "error"])
            .get();
        assert_eq!(success, 1.0);
        assert_eq!(failure, 1.0);
    }

    #[tokio::test]
    async fn test_middleware_records_route_template() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let metrics_for_middleware = metrics.clone();

        let app = Router::new()
            .route("/api/packages/:id", get(|| async { "ok" }))
            .layer(middleware::from_fn(move |req, next| {
                observability_middleware(metrics_for_middleware.clone(), req, next)
            }));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/packages/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let count = metrics
            .http_requests_total
            .with_label_values(&["GET", "/api/packages/:id", "200"])
            .get();
        assert_eq!(count, 1.0);
    }
}
