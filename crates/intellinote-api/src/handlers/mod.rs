//! HTTP handlers for intellinote-api.

pub mod account;
pub mod ai;
pub mod analytics;
pub mod notes;

use axum::Json;

/// Liveness probe. Does not touch the database or require a session.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
