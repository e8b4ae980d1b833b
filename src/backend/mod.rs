//! Backend module - provider trait, Gemini client, prompt assembly and model selection

pub mod model_selector;
pub mod prompt;
pub mod text_backend;

// Re-export provider types for convenience
pub use text_backend::{
    GeminiBackend, Generation, GenerationParams, ProviderError, TextBackend,
};

pub use model_selector::{select_gemini_model, ModelSelector};
