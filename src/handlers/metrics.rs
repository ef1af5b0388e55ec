use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument};

use crate::observability::Metrics;

/// Prometheus text exposition content type
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Serve every registered metric in Prometheus text format
#[instrument(name = "metrics_handler", skip(metrics))]
pub async fn metrics_handler(State(metrics): State<Arc<Metrics>>) -> Response {
    metrics
        .encode()
        .map(|text| {
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
                text,
            )
                .into_response()
        })
        .unwrap_or_else(|e| {
            error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to encode metrics",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            )
                .into_response()
        })
}
