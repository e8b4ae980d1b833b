//! Functional tests for cross-origin handling and routing

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{
        header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, ORIGIN},
        Request, StatusCode,
    },
    Router,
};
use http_body_util::BodyExt;
use medai_gateway::api::routes::create_router;
use medai_gateway::backend::{Generation, GenerationParams, ProviderError, TextBackend};
use medai_gateway::config::Settings;
use medai_gateway::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

const ALLOWED: &str = "https://iitianshreyash01.github.io";
const FOREIGN: &str = "https://elsewhere.example";

#[derive(Default)]
struct CountingBackend {
    calls: AtomicUsize,
}

#[async_trait]
impl TextBackend for CountingBackend {
    fn name(&self) -> &str {
        "counting"
    }

    fn model(&self) -> &str {
        "counting-model"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Generation, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Generation::Text("answer".to_string()))
    }

    async fn probe(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

fn create_test_app(backend: Arc<CountingBackend>) -> Router {
    let state = AppState::new(Settings::default(), Some(backend as Arc<dyn TextBackend>), true);
    create_router(Arc::new(state))
}

fn preflight(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(uri)
        .header(ORIGIN, origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_assistant_preflight_from_allowed_origin() {
    let backend = Arc::new(CountingBackend::default());
    let response = create_test_app(backend.clone())
        .oneshot(preflight("/api/ai-doctor", ALLOWED))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED);
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "CORS preflight OK");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_assistant_preflight_from_foreign_origin() {
    let backend = Arc::new(CountingBackend::default());
    let response = create_test_app(backend.clone())
        .oneshot(preflight("/api/ai-doctor", FOREIGN))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_lookup_preflight_is_answered_by_cors_layer() {
    let response = create_test_app(Arc::new(CountingBackend::default()))
        .oneshot(preflight("/api/specialists", "http://localhost:5500"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5500"
    );
}

#[tokio::test]
async fn test_simple_request_gets_allow_origin() {
    let request = Request::builder()
        .uri("/api/health-tips")
        .header(ORIGIN, "http://127.0.0.1:5500")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(Arc::new(CountingBackend::default()))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://127.0.0.1:5500"
    );
}

#[tokio::test]
async fn test_foreign_origin_gets_no_allow_origin() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/ai-doctor")
        .header(ORIGIN, FOREIGN)
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "cough"}"#))
        .unwrap();

    let response = create_test_app(Arc::new(CountingBackend::default()))
        .oneshot(request)
        .await
        .unwrap();

    // CORS is enforced by the browser; the server still answers
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_wrong_method_is_not_routed_to_handler() {
    let backend = Arc::new(CountingBackend::default());
    let request = Request::builder()
        .method("GET")
        .uri("/api/ai-doctor")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(backend.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key(ALLOW));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Method not allowed");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = create_test_app(Arc::new(CountingBackend::default()))
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/ai-doctor"]["post"].is_object());
    assert!(doc["paths"]["/api/health"]["get"].is_object());
}
