//! # intellinote-api
//!
//! HTTP surface for IntelliNote: note CRUD, analytics, profile, sign-out,
//! and the AI assistant routes. The binary in `main.rs` wires these to
//! PostgreSQL and the Gemini provider; tests wire them to in-memory stores.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use intellinote_core::{GenerationProvider, NoteRepository, ProfileRepository, SessionStore};
use intellinote_db::Database;

pub use auth::RequireAuth;
pub use config::ServerConfig;
pub use error::ApiError;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub sessions: Arc<dyn SessionStore>,
    /// Resolved per request; `None` means no API key is configured.
    pub generation: Arc<dyn GenerationProvider>,
}

impl AppState {
    /// State backed by PostgreSQL repositories.
    pub fn from_database(db: Database, generation: Arc<dyn GenerationProvider>) -> Self {
        Self {
            notes: Arc::new(db.notes),
            profiles: Arc::new(db.profiles),
            sessions: Arc::new(db.sessions),
            generation,
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Routes with request-id propagation and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Notes
        .route(
            "/api/notes",
            get(handlers::notes::list_notes).post(handlers::notes::create_note),
        )
        .route(
            "/api/notes/:id",
            get(handlers::notes::get_note)
                .put(handlers::notes::update_note)
                .delete(handlers::notes::delete_note),
        )
        .route("/api/analytics", get(handlers::analytics::get_analytics))
        // Account
        .route("/api/profile", get(handlers::account::get_profile))
        .route("/api/auth/logout", post(handlers::account::logout))
        // AI assistant
        .route("/api/ai/answer", post(handlers::ai::answer))
        .route("/api/ai/summarize", post(handlers::ai::summarize))
        .route("/api/ai/tags", post(handlers::ai::suggest_tags))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                    user_id = tracing::field::Empty,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}

/// Full application: [`router`] plus CORS and the request body limit.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600));

    router(state)
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
}
