//! AI assistant handlers: question answering, summaries, and tag suggestions.
//!
//! All three routes authenticate first, then validate the body, then make a
//! single generative call. Provider failures are logged and surface as a 500
//! with a fixed message.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use intellinote_core::{parse_tag_list, GenerationBackend, NoteExcerpt};
use intellinote_inference::prompts;

use crate::error::invalid_body;
use crate::{ApiError, AppState, RequireAuth};

const ANSWER_REQUIRED: &str = "Question and notes are required";
const CONTENT_REQUIRED: &str = "Content is required";
const NO_API_KEY: &str = "no API key";

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<NoteExcerpt>>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct TagsRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// Non-blank text, or `None`.
fn required(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Backend for routes that report a missing credential as 503.
fn backend_or_unavailable(state: &AppState) -> Result<Arc<dyn GenerationBackend>, ApiError> {
    state.generation.resolve().ok_or_else(|| {
        warn!(subsystem = "api", component = "ai_routes", "Generation requested without API key");
        ApiError::ServiceUnavailable(NO_API_KEY.to_string())
    })
}

/// Answer a question using only the supplied notes.
///
/// # Returns
/// - 200 OK with `{ "answer": "..." }`
/// - 400 Bad Request if `question` is blank or `notes` is missing/empty
/// - 401 Unauthorized without a session
/// - 500 Internal Server Error if generation fails (including a missing key)
pub async fn answer(
    State(state): State<AppState>,
    auth: RequireAuth,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let Json(req) = payload.map_err(invalid_body(ANSWER_REQUIRED))?;
    let question = required(req.question.as_deref());
    let notes = req.notes.as_deref().filter(|n| !n.is_empty());
    let (Some(question), Some(notes)) = (question, notes) else {
        return Err(ApiError::BadRequest(ANSWER_REQUIRED.to_string()));
    };

    let Some(backend) = state.generation.resolve() else {
        error!(
            subsystem = "api",
            component = "ai_routes",
            "Failed to generate answer: API key is not configured"
        );
        return Err(ApiError::GenerationFailed(
            "Failed to generate answer".to_string(),
        ));
    };

    let prompt = prompts::answer_prompt(question, notes);
    let answer = backend
        .generate(&prompt)
        .await
        .map_err(ApiError::generation("Failed to generate answer"))?;

    info!(
        subsystem = "api",
        component = "ai_routes",
        op = "answer",
        user_id = %auth.user.user_id,
        note_count = notes.len(),
        response_len = answer.len(),
        "Answered question"
    );
    Ok(Json(AnswerResponse { answer }))
}

/// Summarize note content in two to three sentences.
///
/// # Returns
/// - 200 OK with `{ "summary": "..." }`
/// - 400 Bad Request if `content` is blank
/// - 401 Unauthorized without a session
/// - 503 Service Unavailable without an API key
/// - 500 Internal Server Error if generation fails
pub async fn summarize(
    State(state): State<AppState>,
    auth: RequireAuth,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(req) = payload.map_err(invalid_body(CONTENT_REQUIRED))?;
    let content = required(req.content.as_deref())
        .ok_or_else(|| ApiError::BadRequest(CONTENT_REQUIRED.to_string()))?;

    let backend = backend_or_unavailable(&state)?;
    let summary = backend
        .generate(&prompts::summary_prompt(content))
        .await
        .map_err(ApiError::generation("Failed to generate summary"))?;

    info!(
        subsystem = "api",
        component = "ai_routes",
        op = "summarize",
        user_id = %auth.user.user_id,
        response_len = summary.len(),
        "Summarized note"
    );
    Ok(Json(SummarizeResponse { summary }))
}

/// Suggest tags for a note.
///
/// The model's comma-separated reply is split, trimmed and lowercased.
/// Empty pieces are dropped; duplicates are kept.
///
/// # Returns
/// - 200 OK with `{ "tags": [...] }`
/// - 400 Bad Request if `content` is blank (`title` may be empty)
/// - 401 Unauthorized without a session
/// - 503 Service Unavailable without an API key
/// - 500 Internal Server Error if generation fails
pub async fn suggest_tags(
    State(state): State<AppState>,
    auth: RequireAuth,
    payload: Result<Json<TagsRequest>, JsonRejection>,
) -> Result<Json<TagsResponse>, ApiError> {
    let Json(req) = payload.map_err(invalid_body(CONTENT_REQUIRED))?;
    let content = required(req.content.as_deref())
        .ok_or_else(|| ApiError::BadRequest(CONTENT_REQUIRED.to_string()))?;
    let title = req.title.as_deref().unwrap_or_default();

    let backend = backend_or_unavailable(&state)?;
    let raw = backend
        .generate(&prompts::tags_prompt(title, content))
        .await
        .map_err(ApiError::generation("Failed to generate tags"))?;
    let tags = parse_tag_list(&raw);

    info!(
        subsystem = "api",
        component = "ai_routes",
        op = "tags",
        user_id = %auth.user.user_id,
        result_count = tags.len(),
        "Suggested tags"
    );
    Ok(Json(TagsResponse { tags }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(required(None), None);
        assert_eq!(required(Some("  \n")), None);
        assert_eq!(required(Some(" x ")), Some(" x "));
    }

    #[test]
    fn test_answer_request_tolerates_missing_fields() {
        let req: AnswerRequest = serde_json::from_str("{}").unwrap();
        assert!(req.question.is_none());
        assert!(req.notes.is_none());
    }
}
