//! HTTP tests for note CRUD and analytics.

mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{request, Harness};
use intellinote_inference::MockGenerationBackend;

async fn create(h: &Harness, token: &str, body: Value) -> Value {
    let (status, json) = h
        .call(request(Method::POST, "/api/notes", Some(token), Some(body)))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    json
}

fn titles(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("array")
        .iter()
        .map(|n| n["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_notes_require_session() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let (status, json) = h.call(request(Method::GET, "/api/notes", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn test_create_sets_owner_and_defaults() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let note = create(
        &h,
        &h.token,
        json!({ "title": "Groceries", "content": "milk", "tags": ["Food", "food", " "] }),
    )
    .await;

    assert_eq!(note["user_id"], h.user.user_id.to_string());
    assert_eq!(note["folder"], "general");
    assert_eq!(note["tags"], json!(["food"]));
    assert_eq!(note["is_pinned"], false);
    assert_eq!(h.notes.len(), 1);
}

#[tokio::test]
async fn test_create_requires_title_and_content() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    for body in [
        json!({ "title": "", "content": "x" }),
        json!({ "title": "x", "content": "   " }),
        json!({ "title": "x" }),
    ] {
        let (status, json) = h.call(h.authed(Method::POST, "/api/notes", Some(body))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Title and content are required");
    }
    assert!(h.notes.is_empty());
}

#[tokio::test]
async fn test_list_is_pinned_first_then_newest() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let seeded = [
        ("old-pinned", true),
        ("plain", false),
        ("new-pinned", true),
        ("newest", false),
    ];
    for (title, pinned) in seeded {
        create(&h, &h.token, json!({ "title": title, "content": "c", "is_pinned": pinned })).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let (status, list) = h.call(h.authed(Method::GET, "/api/notes", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&list), vec!["new-pinned", "old-pinned", "newest", "plain"]);
}

#[tokio::test]
async fn test_list_query_filters_title_content_and_tags() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    create(&h, &h.token, json!({ "title": "Travel plans", "content": "Lisbon" })).await;
    create(&h, &h.token, json!({ "title": "Work", "content": "standup notes" })).await;
    create(&h, &h.token, json!({ "title": "Misc", "content": "x", "tags": ["travel"] })).await;

    let (_, list) = h.call(h.authed(Method::GET, "/api/notes?q=TRAVEL", None)).await;
    let mut found = titles(&list);
    found.sort();
    assert_eq!(found, vec!["Misc", "Travel plans"]);

    let (_, list) = h.call(h.authed(Method::GET, "/api/notes?q=standup", None)).await;
    assert_eq!(titles(&list), vec!["Work"]);
}

#[tokio::test]
async fn test_list_only_shows_own_notes() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let (_, other_token) = h.second_user().await;
    create(&h, &h.token, json!({ "title": "mine", "content": "c" })).await;
    create(&h, &other_token, json!({ "title": "theirs", "content": "c" })).await;

    let (_, list) = h.call(h.authed(Method::GET, "/api/notes", None)).await;
    assert_eq!(titles(&list), vec!["mine"]);
}

#[tokio::test]
async fn test_delete_requires_matching_owner() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let (_, other_token) = h.second_user().await;
    let note = create(&h, &h.token, json!({ "title": "keep", "content": "c" })).await;
    let uri = format!("/api/notes/{}", note["id"].as_str().expect("id"));

    let (status, _) = h
        .call(request(Method::DELETE, &uri, Some(&other_token), None))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(h.notes.len(), 1);

    let (status, body) = h.call(h.authed(Method::DELETE, &uri, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    assert!(h.notes.is_empty());

    let (status, _) = h.call(h.authed(Method::DELETE, &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_is_owner_scoped() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let (_, other_token) = h.second_user().await;
    let note = create(&h, &h.token, json!({ "title": "private", "content": "c" })).await;
    let uri = format!("/api/notes/{}", note["id"].as_str().expect("id"));

    let (status, fetched) = h.call(h.authed(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "private");

    let (status, _) = h
        .call(request(Method::GET, &uri, Some(&other_token), None))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_is_partial_and_owner_scoped() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let (_, other_token) = h.second_user().await;
    let note = create(
        &h,
        &h.token,
        json!({ "title": "draft", "content": "body", "folder": "work" }),
    )
    .await;
    let uri = format!("/api/notes/{}", note["id"].as_str().expect("id"));

    let (status, _) = h
        .call(request(
            Method::PUT,
            &uri,
            Some(&other_token),
            Some(json!({ "title": "hijacked" })),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, updated) = h
        .call(h.authed(
            Method::PUT,
            &uri,
            Some(json!({ "is_pinned": true, "summary": "short", "tags": ["AI", "ai"] })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "draft");
    assert_eq!(updated["content"], "body");
    assert_eq!(updated["folder"], "work");
    assert_eq!(updated["is_pinned"], true);
    assert_eq!(updated["summary"], "short");
    assert_eq!(updated["tags"], json!(["ai"]));
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let note = create(&h, &h.token, json!({ "title": "t", "content": "c" })).await;
    let uri = format!("/api/notes/{}", note["id"].as_str().expect("id"));

    let (status, json) = h
        .call(h.authed(Method::PUT, &uri, Some(json!({ "title": "  " }))))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Title and content are required");
}

#[tokio::test]
async fn test_malformed_note_id_is_json_bad_request() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    let cases = [
        (Method::GET, None),
        (Method::PUT, Some(json!({ "title": "t" }))),
        (Method::DELETE, None),
    ];
    for (method, body) in cases {
        let (status, json) = h.call(h.authed(method, "/api/notes/not-a-uuid", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Invalid note id" }));
    }
}

#[tokio::test]
async fn test_analytics_counts_folders_and_tags() {
    let h = Harness::new(MockGenerationBackend::new()).await;
    for (folder, tags, pinned) in [
        ("a", json!(["rust", "web"]), true),
        ("a", json!(["rust"]), false),
        ("b", json!([]), false),
    ] {
        create(
            &h,
            &h.token,
            json!({
                "title": "t",
                "content": "c",
                "folder": folder,
                "tags": tags,
                "is_pinned": pinned
            }),
        )
        .await;
    }

    let (status, stats) = h.call(h.authed(Method::GET, "/api/analytics", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_notes"], 3);
    assert_eq!(stats["pinned_notes"], 1);
    assert_eq!(stats["folder_count"], 2);
    assert_eq!(
        stats["top_folders"],
        json!([{ "name": "a", "count": 2 }, { "name": "b", "count": 1 }])
    );
    assert_eq!(stats["top_tags"][0], json!({ "name": "rust", "count": 2 }));
    assert_eq!(stats["unique_tags"], 2);
    assert_eq!(stats["avg_tags_per_note"], 1.0);
}
