//! Startup model selection over an ordered list of candidates

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::backend::text_backend::{GeminiBackend, ProviderError, TextBackend};
use crate::config::ProviderConfig;
use crate::error::truncate_message;

/// Walks candidate models in priority order and keeps the first one that initializes
pub struct ModelSelector {
    candidates: Vec<String>,
    verify: bool,
}

impl ModelSelector {
    pub fn new(candidates: Vec<String>, verify: bool) -> Self {
        Self { candidates, verify }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.candidate_models.clone(), config.verify_models)
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Try each candidate once, in order.
    ///
    /// `build` constructs a backend for a model id. When verification is on the
    /// backend must also pass [`TextBackend::probe`]. Returns `None` when every
    /// candidate fails.
    pub async fn select<F>(&self, mut build: F) -> Option<Arc<dyn TextBackend>>
    where
        F: FnMut(&str) -> Result<Arc<dyn TextBackend>, ProviderError>,
    {
        for model in &self.candidates {
            info!(model = %model, "Trying model");

            match self.try_initialize(model, &mut build).await {
                Ok(backend) => {
                    info!(model = %model, "Successfully initialized model");
                    return Some(backend);
                }
                Err(e) => {
                    warn!(
                        model = %model,
                        error = %truncate_message(&e.to_string(), 100),
                        "Model not available"
                    );
                }
            }
        }

        error!(candidates = self.candidates.len(), "No available models found");
        None
    }

    async fn try_initialize<F>(
        &self,
        model: &str,
        build: &mut F,
    ) -> Result<Arc<dyn TextBackend>, ProviderError>
    where
        F: FnMut(&str) -> Result<Arc<dyn TextBackend>, ProviderError>,
    {
        let backend = build(model)?;
        if self.verify {
            backend.probe().await?;
        }
        Ok(backend)
    }
}

/// Select a Gemini model according to `config`.
///
/// Without an API key nothing is attempted and the assistant stays disabled.
pub async fn select_gemini_model(
    config: &ProviderConfig,
    api_key: Option<&str>,
) -> Option<Arc<dyn TextBackend>> {
    let Some(api_key) = api_key else {
        warn!(env = %config.api_key_env, "Skipping model selection, no API key available");
        return None;
    };

    ModelSelector::from_config(config)
        .select(|model| {
            GeminiBackend::new(config, api_key, model)
                .map(|backend| Arc::new(backend) as Arc<dyn TextBackend>)
        })
        .await
}
