//! Shared fixtures for router-level tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::assessment::narrative::NarrativeWriter;
use crate::assessment::scoring::Profile;
use crate::assessment::trait_table::TraitTable;
use crate::llm_client::LlmError;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryStore;

/// Narrative writer that echoes the dominant category, or fails on demand.
#[derive(Default)]
pub struct StubNarrator {
    pub calls: AtomicUsize,
    pub fail: bool,
}

#[async_trait]
impl NarrativeWriter for StubNarrator {
    async fn write(&self, profile: &Profile) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LlmError::Api {
                status: 401,
                message: "Unauthorized".to_string(),
            });
        }
        Ok(format!("You are a natural {}.", profile.dominant))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub narrator: Arc<StubNarrator>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_narrator(StubNarrator::default())
    }

    pub fn with_failing_narrator() -> Self {
        Self::with_narrator(StubNarrator {
            fail: true,
            ..Default::default()
        })
    }

    fn with_narrator(narrator: StubNarrator) -> Self {
        let store = Arc::new(MemoryStore::default());
        let narrator = Arc::new(narrator);
        let state = AppState {
            store: store.clone(),
            narrator: narrator.clone(),
            traits: Arc::new(TraitTable::standard()),
        };
        Self {
            router: build_router(state),
            store,
            narrator,
        }
    }

    pub fn narrator_calls(&self) -> usize {
        self.narrator.calls.load(Ordering::SeqCst)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.get_raw(uri).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub async fn get_raw(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }
}
