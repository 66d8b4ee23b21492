//! HTTP tests for health, profile, logout, and server middleware.

mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use serde_json::json;

use common::{request, Harness};
use intellinote_api::ServerConfig;
use intellinote_core::Profile;
use intellinote_inference::MockGenerationBackend;

#[tokio::test]
async fn test_health_needs_no_session() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let (status, json) = h.call(request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let response = h.send(request(Method::GET, "/health", None, None)).await;
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_profile_lookup() {
    let h = Harness::new(MockGenerationBackend::new()).await;

    let (status, json) = h.call(h.authed(Method::GET, "/api/profile", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());

    let now = Utc::now();
    h.profiles.put(Profile {
        id: h.user.user_id,
        full_name: Some("Ada Lovelace".to_string()),
        avatar_url: None,
        created_at: now,
        updated_at: now,
    });

    let (status, json) = h.call(h.authed(Method::GET, "/api/profile", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["full_name"], "Ada Lovelace");
    assert_eq!(json["id"], h.user.user_id.to_string());
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let h = Harness::new(MockGenerationBackend::new()).await;

    let (status, _) = h.call(h.authed(Method::POST, "/api/auth/logout", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = h.call(h.authed(Method::GET, "/api/notes", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let h = Harness::with_config(ServerConfig {
        max_body_bytes: 64,
        ..Default::default()
    })
    .await;
    let body = json!({ "title": "t", "content": "x".repeat(1024) });
    let response = h.send(h.authed(Method::POST, "/api/notes", Some(body))).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(h.notes.is_empty());
}
