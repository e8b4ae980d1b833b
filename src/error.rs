//! Application error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::models::ErrorResponse;
use crate::backend::ProviderError;

/// Longest provider diagnostic echoed back to clients, in characters
pub const MAX_ERROR_DETAIL_CHARS: usize = 100;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Malformed or empty client input
    #[error("{0}")]
    InvalidRequest(String),

    /// No model survived startup selection
    #[error("AI model not initialized.")]
    ModelUnavailable,

    #[error("Server error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Whole-request deadline elapsed
    #[error("Request timed out")]
    Timeout,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            AppError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::failed("AI model not initialized."),
            ),
            AppError::Provider(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::failed(format!(
                    "Server error: {}",
                    truncate_message(&e.to_string(), MAX_ERROR_DETAIL_CHARS)
                )),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Endpoint not found"),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                ErrorResponse::failed("Request timed out"),
            ),
            AppError::Config(e) => {
                error!(error = %e, "Configuration error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
            AppError::Internal(message) => {
                error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Cut `message` down to at most `max_chars` characters, respecting char boundaries
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

pub type Result<T> = std::result::Result<T, AppError>;
