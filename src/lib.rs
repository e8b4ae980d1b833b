//! MedAI Gateway
//!
//! A small HTTP service that relays symptom questions to a hosted generative-language
//! model (Google Gemini) and serves a couple of static lookup endpoints.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;

pub use error::{AppError, Result};

use std::sync::Arc;

use api::cors::CorsPolicy;
use backend::{GenerationParams, TextBackend};

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    /// Model chosen at startup; `None` keeps the assistant endpoint disabled
    pub assistant: Option<Arc<dyn TextBackend>>,
    /// Whether the provider credential was present when the process started
    pub credential_present: bool,
    pub generation: GenerationParams,
    pub cors: CorsPolicy,
}

impl AppState {
    pub fn new(
        settings: config::Settings,
        assistant: Option<Arc<dyn TextBackend>>,
        credential_present: bool,
    ) -> Self {
        let generation = GenerationParams::from(&settings.provider);
        let cors = CorsPolicy::from_config(&settings.cors);

        Self {
            settings: Arc::new(settings),
            assistant,
            credential_present,
            generation,
            cors,
        }
    }

    /// Identifier of the selected model, if any
    pub fn model_name(&self) -> Option<&str> {
        self.assistant.as_deref().map(|backend| backend.model())
    }
}
