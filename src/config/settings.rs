//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `MEDAI__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "MEDAI";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for a whole request, provider round trip included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    90000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Cross-origin policy for the `/api` routes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://iitianshreyash01.github.io".to_string(),
        "http://localhost:5500".to_string(),
        "http://127.0.0.1:5500".to_string(),
    ]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Generative-language provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Models tried in order at startup; the first that initializes wins
    #[serde(default = "default_candidate_models")]
    pub candidate_models: Vec<String>,

    /// Probe each candidate against the provider before accepting it
    #[serde(default = "default_true")]
    pub verify_models: bool,

    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_candidate_models() -> Vec<String> {
    vec![
        "gemini-2.0-flash-exp".to_string(),
        "gemini-1.5-pro".to_string(),
        "gemini-1.5-flash".to_string(),
        "gemini-pro".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    60000
}

fn default_max_output_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            candidate_models: default_candidate_models(),
            verify_models: default_true(),
            timeout_ms: default_timeout(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl ProviderConfig {
    /// Read the API key from the configured environment variable.
    ///
    /// Blank values count as missing.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `json` or `text`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/medai.yaml")
    }

    /// Load settings from a specific configuration file (YAML or TOML).
    ///
    /// A missing file is not an error; defaults and environment overrides still apply.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if path.exists() {
            builder = builder.add_source(File::from(path).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("provider.candidate_models")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(invalid("Server port cannot be 0"));
        }

        if self.server.request_timeout_ms == 0 {
            return Err(invalid("request_timeout_ms must be greater than 0"));
        }

        if self.provider.base_url.trim().is_empty() {
            return Err(invalid("Provider base_url cannot be empty"));
        }

        if self.provider.candidate_models.is_empty() {
            return Err(invalid("At least one candidate model must be configured"));
        }

        if self
            .provider
            .candidate_models
            .iter()
            .any(|model| model.trim().is_empty())
        {
            return Err(invalid("Candidate model names cannot be empty"));
        }

        if self.provider.max_output_tokens == 0 {
            return Err(invalid("max_output_tokens must be greater than 0"));
        }

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(invalid(format!(
                "temperature must be within [0, 2], got {}",
                self.provider.temperature
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::Config(config::ConfigError::Message(message.into()))
}
