use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::handlers::{
    create_api_router, handle_panic, health_check, metrics_handler,
    request_validation_middleware, security_headers_middleware, RequestLimits,
};
use crate::observability::{observability_middleware, Metrics};
use crate::repositories::Storage;

/// Build the full application: public API, operational endpoints and middleware
pub fn create_app(storage: Arc<dyn Storage>, metrics: Arc<Metrics>, limits: RequestLimits) -> Router {
    let router = Router::new()
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics.clone())
        .merge(create_api_router(storage, metrics.clone()));

    with_middleware(router, metrics, limits)
}

/// Wrap a router in the service middleware stack (order matters - inner to outer)
pub fn with_middleware(router: Router, metrics: Arc<Metrics>, limits: RequestLimits) -> Router {
    router
        // Enforced while buffering, so bodies without Content-Length are bounded too
        .layer(DefaultBodyLimit::max(limits.max_request_size))
        .layer(middleware::from_fn_with_state(
            limits,
            request_validation_middleware,
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics.clone(), req, next)
        }))
}
