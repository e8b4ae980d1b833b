//! HTTP route definitions

use crate::api::models::*;
use crate::api::{assistant_handlers, handlers};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MedAI Gateway API",
        version = "0.1.0",
        description = "Symptom assistant backed by a hosted generative-language model, plus static lookup endpoints.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        handlers::health_check,
        handlers::list_specialists,
        handlers::list_health_tips,
        assistant_handlers::ai_doctor,
        assistant_handlers::ai_doctor_preflight,
    ),
    components(schemas(
        HealthResponse,
        AiDoctorRequest,
        AiDoctorResponse,
        PreflightResponse,
        Specialist,
        SpecialistsResponse,
        HealthTipsResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Assistant", description = "Symptom assistant"),
        (name = "Directory", description = "Static specialist and tip listings"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let cors = state.cors.layer();
    let request_timeout = Duration::from_millis(state.settings.server.request_timeout_ms);

    // The assistant's OPTIONS handler sits outside the CORS layer so it can answer
    // preflights itself; every other method is wrapped.
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check).layer(cors.clone()))
        .route(
            "/ai-doctor",
            post(assistant_handlers::ai_doctor)
                .layer::<_, Infallible>(cors.clone())
                .options(assistant_handlers::ai_doctor_preflight),
        )
        .route("/specialists", get(handlers::list_specialists).layer(cors.clone()))
        .route("/health-tips", get(handlers::list_health_tips).layer(cors));

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes under /api prefix
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        // Add shared state
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(handlers::json_error_bodies))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
