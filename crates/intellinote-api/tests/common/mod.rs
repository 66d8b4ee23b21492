//! Shared harness for HTTP tests: in-memory stores plus a mock generation backend.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::Duration;
use serde_json::Value;
use tower::util::ServiceExt;
use uuid::Uuid;

use intellinote_api::{app, AppState, ServerConfig};
use intellinote_core::defaults::SESSION_TTL_HOURS;
use intellinote_core::{FixedGenerationProvider, SessionStore, SessionUser};
use intellinote_db::{MemoryNoteRepository, MemoryProfileRepository, MemorySessionStore};
use intellinote_inference::MockGenerationBackend;

pub struct Harness {
    pub app: Router,
    pub notes: Arc<MemoryNoteRepository>,
    pub profiles: Arc<MemoryProfileRepository>,
    pub sessions: Arc<MemorySessionStore>,
    pub backend: MockGenerationBackend,
    pub user: SessionUser,
    pub token: String,
}

impl Harness {
    /// Harness whose provider hands out `backend`.
    pub async fn new(backend: MockGenerationBackend) -> Self {
        let provider = FixedGenerationProvider::new(Arc::new(backend.clone()));
        Self::build(backend, provider, ServerConfig::default()).await
    }

    /// Harness with no API key configured. `backend` is never reachable.
    pub async fn without_api_key() -> Self {
        Self::build(
            MockGenerationBackend::new(),
            FixedGenerationProvider::unconfigured(),
            ServerConfig::default(),
        )
        .await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let backend = MockGenerationBackend::new();
        let provider = FixedGenerationProvider::new(Arc::new(backend.clone()));
        Self::build(backend, provider, config).await
    }

    async fn build(
        backend: MockGenerationBackend,
        provider: FixedGenerationProvider,
        config: ServerConfig,
    ) -> Self {
        let notes = Arc::new(MemoryNoteRepository::new());
        let profiles = Arc::new(MemoryProfileRepository::new());
        let sessions = Arc::new(MemorySessionStore::new());

        let state = AppState {
            notes: notes.clone(),
            profiles: profiles.clone(),
            sessions: sessions.clone(),
            generation: Arc::new(provider),
        };

        let user = SessionUser {
            user_id: Uuid::now_v7(),
            email: Some("owner@example.com".to_string()),
        };
        let token = sessions
            .issue(&user, Duration::hours(SESSION_TTL_HOURS))
            .await
            .expect("issue session");

        Self {
            app: app(state, &config),
            notes,
            profiles,
            sessions,
            backend,
            user,
            token,
        }
    }

    /// Sign in a second, unrelated user.
    pub async fn second_user(&self) -> (SessionUser, String) {
        let user = SessionUser {
            user_id: Uuid::now_v7(),
            email: Some("other@example.com".to_string()),
        };
        let token = self
            .sessions
            .issue(&user, Duration::hours(1))
            .await
            .expect("issue session");
        (user, token)
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty).
    pub async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, json)
    }

    /// Authenticated JSON request as the primary user.
    pub fn authed(&self, method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        request(method, uri, Some(&self.token), body)
    }
}

/// Build a request with an optional bearer token and JSON body.
pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("valid request")
}

/// Request with a raw (possibly malformed) JSON body.
pub fn raw_json(uri: &str, token: Option<&str>, raw: &'static str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(raw)).expect("valid request")
}
