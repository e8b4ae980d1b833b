//! Main entry point for the MedAI Gateway

use medai_gateway::{
    api,
    backend::select_gemini_model,
    config::{LoggingConfig, Settings},
    AppState,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("text") {
        registry.with(fmt::layer()).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    init_tracing(&settings.logging);

    info!("Starting MedAI Gateway");
    info!(
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    let api_key = settings.provider.api_key();
    if api_key.is_some() {
        info!("Gemini API configured successfully");
    } else {
        error!(
            env = %settings.provider.api_key_env,
            "API key not found in environment variables"
        );
    }

    // Pick the first candidate model that initializes
    let assistant = select_gemini_model(&settings.provider, api_key.as_deref()).await;
    if assistant.is_none() {
        error!("AI assistant disabled until restart");
    }

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let app_state = Arc::new(AppState::new(settings, assistant, api_key.is_some()));

    // Build the router
    let app = api::routes::create_router(app_state);

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
