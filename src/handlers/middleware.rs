use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use std::any::Any;
use tracing::{error, warn};

/// Limits enforced by `request_validation_middleware`
#[derive(Debug, Clone, Copy)]
pub struct RequestLimits {
    pub max_request_size: usize,
}

/// Request validation middleware
pub async fn request_validation_middleware(
    State(limits): State<RequestLimits>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    // Validate content type for POST/PUT requests
    validate_content_type(&request)?;

    // Validate request size
    validate_request_size(&request, limits.max_request_size)?;

    Ok(next.run(request).await)
}

/// Validate content type for requests with body
fn validate_content_type(request: &Request<Body>) -> Result<(), (StatusCode, Json<Value>)> {
    let method = request.method();

    // Only validate content type for requests that should have a body
    if method == "POST" || method == "PUT" || method == "PATCH" {
        let headers = request.headers();

        if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
            let content_type_str = content_type.to_str().unwrap_or("");

            if !content_type_str.starts_with("application/json") {
                warn!("Invalid content type: {}", content_type_str);
                return Err((
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    Json(json!({
                        "error": "Unsupported media type",
                        "message": "Content-Type must be application/json",
                        "timestamp": chrono::Utc::now().to_rfc3339(),
                    })),
                ));
            }
        } else {
            warn!("Missing content type header");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Missing content type",
                    "message": "Content-Type header is required for requests with body",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            ));
        }
    }

    Ok(())
}

/// Reject requests whose declared length exceeds the configured maximum
fn validate_request_size(
    request: &Request<Body>,
    max_request_size: usize,
) -> Result<(), (StatusCode, Json<Value>)> {
    let declared_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    if let Some(length) = declared_length {
        if length > max_request_size as u64 {
            error!("Request too large: {} bytes", length);
            return Err((
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({
                    "error": "Request too large",
                    "message": format!("Request size {} bytes exceeds maximum of {} bytes", length, max_request_size),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            ));
        }
    }

    Ok(())
}

/// Security headers middleware
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        HeaderName::from_static("x-xss-protection"),
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'"),
    );

    response
}

/// Turn a handler panic into a generic JSON 500
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic payload"
    };
    crate::error_with_trace!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        middleware,
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt;

    fn app(max_request_size: usize) -> Router {
        Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(
                RequestLimits { max_request_size },
                request_validation_middleware,
            ))
            .layer(middleware::from_fn(security_headers_middleware))
    }

    fn post_request(content_type: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/echo");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder
            .header("content-length", body.len().to_string())
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_json_post_passes() {
        let response = app(1024)
            .oneshot(post_request(Some("application/json"), "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_415() {
        let response = app(1024)
            .oneshot(post_request(Some("text/plain"), "hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let response = app(1024)
            .oneshot(post_request(None, "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_request_is_413() {
        let body = format!("{{\"message\":\"{}\"}}", "a".repeat(64));
        let response = app(32)
            .oneshot(post_request(Some("application/json"), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_get_skips_content_type_check() {
        let response = app(1024)
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = app(1024)
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["content-security-policy"], "default-src 'self'");
    }

    #[test]
    fn test_handle_panic_hides_payload() {
        let response = handle_panic(Box::new("database exploded".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
