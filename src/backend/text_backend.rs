//! Text generation backend for the symptom assistant
//! Talks to the Gemini `generateContent` REST API

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client, Response, StatusCode,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::ProviderConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Failure categories at the provider boundary
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Response blocked by provider: {0}")]
    ContentFiltered(String),

    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

/// Outcome of a call the provider answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    /// Provider answered but produced no text
    Empty,
}

impl Generation {
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            Generation::Empty
        } else {
            Generation::Text(text)
        }
    }
}

/// Generation budget applied to every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl From<&ProviderConfig> for GenerationParams {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        }
    }
}

/// Trait for text generation backends
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Model identifier this backend is bound to
    fn model(&self) -> &str;

    /// Generate a reply for a fully assembled prompt
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Generation, ProviderError>;

    /// Check that the bound model is reachable
    async fn probe(&self) -> Result<(), ProviderError>;
}

/// Gemini REST backend bound to a single model
pub struct GeminiBackend {
    model: String,
    base_url: String,
    client: Client,
    api_key: HeaderValue,
}

impl GeminiBackend {
    /// Create a backend for `model`
    pub fn new(config: &ProviderConfig, api_key: &str, model: &str) -> Result<Self, ProviderError> {
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|e| ProviderError::NotConfigured(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            model: model.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
        })
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        headers
    }

    /// Turn non-2xx answers into categorized errors
    async fn check_status(&self, response: Response) -> Result<Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(model = %self.model, "Provider rate limit hit");
            return Err(ProviderError::RateLimited);
        }

        Err(ProviderError::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        })
    }
}

#[async_trait]
impl TextBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Generation, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: params.max_output_tokens,
                temperature: params.temperature,
            },
        };

        let url = format!("{}:generateContent", self.model_url());

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let response = self.check_status(response).await?;

        let body = response.json::<GenerateContentResponse>().await.map_err(|e| {
            error!(model = %self.model, error = %e, "Failed to parse generateContent response");
            ProviderError::Parse(e.to_string())
        })?;

        body.into_generation()
    }

    async fn probe(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(self.model_url())
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        self.check_status(response).await?;
        debug!(model = %self.model, "Model probe passed");
        Ok(())
    }
}

/// Prefer the `error.message` field of a Google API error body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// Gemini API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts matter here; other part kinds deserialize with `text: None`
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    fn into_generation(self) -> Result<Generation, ProviderError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ProviderError::ContentFiltered(reason));
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Ok(Generation::Empty);
        };

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(ProviderError::ContentFiltered("SAFETY".to_string()));
        }

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Generation::from_text(text))
    }
}
