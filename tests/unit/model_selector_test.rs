//! Unit tests for startup model selection

use async_trait::async_trait;
use medai_gateway::backend::{
    select_gemini_model, Generation, GenerationParams, ModelSelector, ProviderError, TextBackend,
};
use medai_gateway::config::ProviderConfig;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct ProbedBackend {
    model: String,
    available: bool,
    probes: Arc<AtomicUsize>,
}

#[async_trait]
impl TextBackend for ProbedBackend {
    fn name(&self) -> &str {
        "probed"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Generation, ProviderError> {
        Ok(Generation::Empty)
    }

    async fn probe(&self) -> Result<(), ProviderError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        if self.available {
            Ok(())
        } else {
            Err(ProviderError::Api {
                status: 404,
                message: format!("models/{} is not found", self.model),
            })
        }
    }
}

fn candidates(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Builder that marks only `available` models as reachable and records build order
fn builder(
    available: &[&str],
    tried: Arc<Mutex<Vec<String>>>,
    probes: Arc<AtomicUsize>,
) -> impl FnMut(&str) -> Result<Arc<dyn TextBackend>, ProviderError> {
    let available: HashSet<String> = available.iter().map(|m| m.to_string()).collect();
    move |model: &str| {
        tried.lock().unwrap().push(model.to_string());
        Ok(Arc::new(ProbedBackend {
            model: model.to_string(),
            available: available.contains(model),
            probes: probes.clone(),
        }) as Arc<dyn TextBackend>)
    }
}

#[tokio::test]
async fn test_first_available_candidate_wins() {
    let selector = ModelSelector::new(candidates(&["a", "b", "c", "d"]), true);
    let tried = Arc::new(Mutex::new(Vec::new()));
    let probes = Arc::new(AtomicUsize::new(0));

    let selected = selector
        .select(builder(&["b", "d"], tried.clone(), probes.clone()))
        .await
        .unwrap();

    assert_eq!(selected.model(), "b");
    assert_eq!(*tried.lock().unwrap(), vec!["a", "b"]);
    assert_eq!(probes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_all_candidates_failing_disables_assistant() {
    let selector = ModelSelector::new(candidates(&["a", "b"]), true);
    let tried = Arc::new(Mutex::new(Vec::new()));

    let selected = selector
        .select(builder(&[], tried.clone(), Arc::new(AtomicUsize::new(0))))
        .await;

    assert!(selected.is_none());
    assert_eq!(*tried.lock().unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_without_verification_first_build_wins() {
    let selector = ModelSelector::new(candidates(&["a", "b"]), false);
    let probes = Arc::new(AtomicUsize::new(0));

    let selected = selector
        .select(builder(&[], Arc::new(Mutex::new(Vec::new())), probes.clone()))
        .await
        .unwrap();

    assert_eq!(selected.model(), "a");
    assert_eq!(probes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_build_failure_moves_to_next_candidate() {
    let selector = ModelSelector::new(candidates(&["broken", "fine"]), false);

    let selected = selector
        .select(|model: &str| {
            if model == "broken" {
                Err(ProviderError::NotConfigured("cannot build".to_string()))
            } else {
                Ok(Arc::new(ProbedBackend {
                    model: model.to_string(),
                    available: true,
                    probes: Arc::new(AtomicUsize::new(0)),
                }) as Arc<dyn TextBackend>)
            }
        })
        .await
        .unwrap();

    assert_eq!(selected.model(), "fine");
}

#[tokio::test]
async fn test_empty_candidate_list_selects_nothing() {
    let selector = ModelSelector::new(Vec::new(), true);
    let selected = selector
        .select(builder(&["a"], Arc::new(Mutex::new(Vec::new())), Arc::new(AtomicUsize::new(0))))
        .await;
    assert!(selected.is_none());
}

#[test]
fn test_selector_from_config_keeps_priority_order() {
    let selector = ModelSelector::from_config(&ProviderConfig::default());
    assert_eq!(
        selector.candidates(),
        &["gemini-2.0-flash-exp", "gemini-1.5-pro", "gemini-1.5-flash", "gemini-pro"]
    );
}

#[tokio::test]
async fn test_missing_api_key_skips_selection() {
    let server = MockServer::start().await;
    let config = ProviderConfig {
        base_url: server.uri(),
        ..Default::default()
    };

    assert!(select_gemini_model(&config, None).await.is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_gemini_selection_follows_probe_results() {
    let server = MockServer::start().await;
    for model in ["gemini-2.0-flash-exp", "gemini-1.5-pro"] {
        Mock::given(method("GET"))
            .and(path(format!("/models/{}", model)))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/models/gemini-1.5-flash"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/models/gemini-pro"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ProviderConfig {
        base_url: server.uri(),
        ..Default::default()
    };

    let selected = select_gemini_model(&config, Some("key")).await.unwrap();
    assert_eq!(selected.model(), "gemini-1.5-flash");
    assert_eq!(selected.name(), "gemini");
}
