//! API request and response models

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current time as an RFC 3339 string
pub fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Whether the provider API key was present at startup
    pub gemini_configured: bool,
    /// Selected model identifier, or "Unknown"
    pub model: String,
}

/// Symptom question for the assistant
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AiDoctorRequest {
    #[serde(default)]
    pub message: String,
}

/// Assistant reply
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AiDoctorResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl AiDoctorResponse {
    pub fn answered(text: String) -> Self {
        Self {
            success: true,
            response: Some(text),
            error: None,
            timestamp: Some(timestamp()),
        }
    }

    /// The provider answered without any text
    pub fn empty() -> Self {
        Self {
            success: false,
            response: None,
            error: Some("Empty response from AI model.".to_string()),
            timestamp: None,
        }
    }
}

/// Acknowledgment for a plain preflight request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PreflightResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Specialist {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SpecialistsResponse {
    pub success: bool,
    pub specialists: Vec<Specialist>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthTipsResponse {
    pub success: bool,
    pub tips: Vec<String>,
}

/// Error payload shared by every failing endpoint
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: None,
        }
    }

    /// Error payload that also carries `success: false`
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: Some(false),
        }
    }
}
