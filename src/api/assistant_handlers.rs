//! Symptom assistant handlers

use crate::api::models::{AiDoctorRequest, AiDoctorResponse, ErrorResponse, PreflightResponse};
use crate::backend::{prompt, Generation};
use crate::error::{truncate_message, AppError};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::ORIGIN, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Answer a symptom question through the selected model
#[utoipa::path(
    post,
    path = "/api/ai-doctor",
    tag = "Assistant",
    request_body = AiDoctorRequest,
    responses(
        (status = 200, description = "Model answered; `success` is false when the answer was empty", body = AiDoctorResponse),
        (status = 400, description = "Missing, malformed or empty message", body = ErrorResponse),
        (status = 500, description = "No model initialized or provider failure", body = ErrorResponse),
    )
)]
pub async fn ai_doctor(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AiDoctorResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected assistant payload");
        no_json_data()
    })?;
    let request = parse_request(payload)?;

    let user_input = request.message.trim();
    if user_input.is_empty() {
        return Err(AppError::InvalidRequest(
            "Message cannot be empty".to_string(),
        ));
    }

    let backend = state.assistant.as_ref().ok_or(AppError::ModelUnavailable)?;

    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        model = %backend.model(),
        query = %truncate_message(user_input, 60),
        "Processing query"
    );

    let full_prompt = prompt::assemble(user_input);

    let outcome = backend
        .generate(&full_prompt, &state.generation)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Error in ai_doctor endpoint");
            AppError::Provider(e)
        })?;

    match outcome {
        Generation::Text(text) => {
            info!(request_id = %request_id, response_len = text.len(), "Query answered");
            Ok(Json(AiDoctorResponse::answered(text)))
        }
        Generation::Empty => {
            warn!(request_id = %request_id, "Model returned an empty response");
            Ok(Json(AiDoctorResponse::empty()))
        }
    }
}

fn no_json_data() -> AppError {
    AppError::InvalidRequest("No JSON data provided".to_string())
}

/// Only a non-empty JSON object with a string (or absent) `message` is a request
fn parse_request(payload: Value) -> Result<AiDoctorRequest, AppError> {
    match payload {
        Value::Object(fields) if !fields.is_empty() => {
            serde_json::from_value(Value::Object(fields)).map_err(|e| {
                debug!(error = %e, "Rejected assistant payload");
                no_json_data()
            })
        }
        _ => Err(no_json_data()),
    }
}

/// Acknowledge a preflight without touching the model
#[utoipa::path(
    options,
    path = "/api/ai-doctor",
    tag = "Assistant",
    responses((status = 200, description = "Preflight acknowledged", body = PreflightResponse))
)]
pub async fn ai_doctor_preflight(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let cors_headers = state.cors.preflight_headers(headers.get(ORIGIN));

    (
        StatusCode::OK,
        cors_headers,
        Json(PreflightResponse {
            status: "CORS preflight OK".to_string(),
        }),
    )
}
