//! HTTP request handlers for the status and lookup endpoints

use crate::api::catalog;
use crate::api::models::{timestamp, HealthResponse, HealthTipsResponse, SpecialistsResponse};
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::State,
    http::{header::CONTENT_LENGTH, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, error};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service status", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Health check requested");

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: timestamp(),
        gemini_configured: state.credential_present,
        model: state.model_name().unwrap_or("Unknown").to_string(),
    })
}

/// List the specialist directory
#[utoipa::path(
    get,
    path = "/api/specialists",
    tag = "Directory",
    responses((status = 200, description = "Fixed specialist list", body = SpecialistsResponse))
)]
pub async fn list_specialists() -> Json<SpecialistsResponse> {
    Json(SpecialistsResponse {
        success: true,
        specialists: catalog::specialists(),
    })
}

/// List general health tips
#[utoipa::path(
    get,
    path = "/api/health-tips",
    tag = "Directory",
    responses((status = 200, description = "Fixed list of tips", body = HealthTipsResponse))
)]
pub async fn list_health_tips() -> Json<HealthTipsResponse> {
    Json(HealthTipsResponse {
        success: true,
        tips: catalog::health_tips(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    debug!(method = %method, uri = %uri, "No route matched");
    AppError::NotFound
}

/// Give the bodiless 405 and 408 answers from routing and the timeout layer a JSON payload.
///
/// Headers such as `Allow` are kept.
pub async fn json_error_bodies(response: Response) -> Response {
    let error = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed,
        StatusCode::REQUEST_TIMEOUT => AppError::Timeout,
        _ => return response,
    };

    let (mut parts, _) = response.into_parts();
    let (replacement, body) = error.into_response().into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.extend(replacement.headers);
    Response::from_parts(parts, body)
}

/// Turn a handler panic into the generic 500 payload
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(error = %details, "Handler panicked");
    AppError::Internal(details).into_response()
}
