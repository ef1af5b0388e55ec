use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::models::{
    ContactForm, ContactResponse, GalleryItem, Package, Service, Testimonial, ValidationIssue,
};
use crate::observability::{Metrics, StoreTracer};
use crate::repositories::Storage;

type ApiError = (StatusCode, Json<Value>);

/// Shared state for the public API routes
#[derive(Clone)]
pub struct ApiState {
    pub storage: Arc<dyn Storage>,
    pub tracer: StoreTracer,
    pub metrics: Arc<Metrics>,
}

/// Create API router with all public endpoints
pub fn create_api_router(storage: Arc<dyn Storage>, metrics: Arc<Metrics>) -> Router {
    let state = ApiState {
        storage,
        tracer: StoreTracer::new(metrics.clone()),
        metrics,
    };

    Router::new()
        .route("/api/packages", get(list_packages))
        .route("/api/packages/:id", get(get_package))
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/services", get(list_services))
        .route("/api/gallery", get(list_gallery))
        .route("/api/contact", post(submit_contact))
        .with_state(state)
}

// =============================================================================
// CATALOG ENDPOINTS
// =============================================================================

/// List all tour packages
#[instrument(name = "list_packages", skip(state))]
pub async fn list_packages(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Package>>, ApiError> {
    match state
        .tracer
        .trace("get_all", "package", state.storage.get_all_packages())
        .await
    {
        Ok(packages) => {
            info!("Listed {} packages", packages.len());
            Ok(Json(packages))
        }
        Err(err) => {
            error!("Failed to list packages: {}", err);
            Err(internal_error("Failed to fetch packages"))
        }
    }
}

/// Get a single package by id
#[instrument(name = "get_package", skip(state), fields(package_id = %id))]
pub async fn get_package(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Package>, ApiError> {
    match state
        .tracer
        .trace("get", "package", state.storage.get_package(&id))
        .await
    {
        Ok(Some(package)) => Ok(Json(package)),
        Ok(None) => {
            info!("Package {} not found", id);
            Err(error_response(StatusCode::NOT_FOUND, "Package not found"))
        }
        Err(err) => {
            error!("Failed to get package {}: {}", id, err);
            Err(internal_error("Failed to fetch package"))
        }
    }
}

#[instrument(name = "list_testimonials", skip(state))]
pub async fn list_testimonials(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    state
        .tracer
        .trace("get_all", "testimonial", state.storage.get_all_testimonials())
        .await
        .map(Json)
        .map_err(|err| {
            error!("Failed to list testimonials: {}", err);
            internal_error("Failed to fetch testimonials")
        })
}

#[instrument(name = "list_services", skip(state))]
pub async fn list_services(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Service>>, ApiError> {
    state
        .tracer
        .trace("get_all", "service", state.storage.get_all_services())
        .await
        .map(Json)
        .map_err(|err| {
            error!("Failed to list services: {}", err);
            internal_error("Failed to fetch services")
        })
}

#[instrument(name = "list_gallery", skip(state))]
pub async fn list_gallery(
    State(state): State<ApiState>,
) -> Result<Json<Vec<GalleryItem>>, ApiError> {
    state
        .tracer
        .trace("get_all", "gallery_item", state.storage.get_all_gallery_items())
        .await
        .map(Json)
        .map_err(|err| {
            error!("Failed to list gallery items: {}", err);
            internal_error("Failed to fetch gallery items")
        })
}

// =============================================================================
// CONTACT ENDPOINT
// =============================================================================

/// Validate a contact form and hand it to the store.
///
/// The body is taken as raw JSON so that every field problem can be reported
/// at once; a body that is not JSON at all becomes a single issue at the root.
/// Bodies over the configured size limit are refused with 413.
#[instrument(name = "submit_contact", skip(state, payload))]
pub async fn submit_contact(
    State(state): State<ApiState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let parsed = match payload {
        Ok(Json(body)) => ContactForm::parse(&body),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            crate::warn_with_trace!("Contact form body exceeds the request size limit");
            state.metrics.record_contact_submission("rejected");
            return Err(error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Request too large",
            ));
        }
        Err(rejection) => Err(vec![ValidationIssue::body(
            "invalid_type",
            rejection.body_text(),
        )]),
    };

    let form = match parsed {
        Ok(form) => form,
        Err(issues) => {
            crate::warn_with_trace!(issues = issues.len(), "Contact form rejected");
            state.metrics.record_contact_submission("rejected");
            return Err(validation_error(issues));
        }
    };

    match state
        .tracer
        .trace("submit", "contact", state.storage.submit_contact_form(form))
        .await
    {
        Ok(()) => {
            state.metrics.record_contact_submission("accepted");
            Ok(Json(ContactResponse {
                success: true,
                message: "Contact form submitted successfully".to_string(),
            }))
        }
        Err(err) => {
            crate::error_with_trace!("Failed to submit contact form: {}", err);
            state.metrics.record_contact_submission("failed");
            Err(internal_error("Failed to submit contact form"))
        }
    }
}

// =============================================================================
// ERROR RESPONSES
// =============================================================================

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Generic 500; the underlying error is only logged
fn internal_error(message: &str) -> ApiError {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn validation_error(issues: Vec<ValidationIssue>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Validation failed",
            "details": issues,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
