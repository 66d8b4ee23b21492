//! Note CRUD handlers. Every query is scoped to the authenticated caller.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use intellinote_core::{filter_notes, CreateNoteRequest, Note, UpdateNoteRequest};

use crate::error::{invalid_body, invalid_path};
use crate::{ApiError, AppState, RequireAuth};

const TITLE_CONTENT_REQUIRED: &str = "Title and content are required";
const LOAD_FAILED: &str = "Failed to load notes";
const SAVE_FAILED: &str = "Failed to save note";
const DELETE_FAILED: &str = "Failed to delete note";
const INVALID_ID: &str = "Invalid note id";

/// Query parameters for listing notes.
#[derive(Debug, Default, Deserialize)]
pub struct ListNotesQuery {
    /// Case-insensitive filter over title, content and tags.
    pub q: Option<String>,
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Note {} not found", id))
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// List the caller's notes, pinned first and newest first.
pub async fn list_notes(
    State(state): State<AppState>,
    auth: RequireAuth,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .notes
        .list_for_owner(auth.user.user_id)
        .await
        .map_err(ApiError::persistence(LOAD_FAILED))?;
    let notes = match query.q.as_deref() {
        Some(q) => filter_notes(notes, q),
        None => notes,
    };
    Ok(Json(notes))
}

/// Create a note owned by the caller.
///
/// # Returns
/// - 201 Created with the stored note
/// - 400 Bad Request if `title` or `content` is blank
pub async fn create_note(
    State(state): State<AppState>,
    auth: RequireAuth,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(req) = payload.map_err(invalid_body(TITLE_CONTENT_REQUIRED))?;
    if is_blank(&req.title) || is_blank(&req.content) {
        return Err(ApiError::BadRequest(TITLE_CONTENT_REQUIRED.to_string()));
    }

    let note = state
        .notes
        .insert(auth.user.user_id, req)
        .await
        .map_err(ApiError::persistence(SAVE_FAILED))?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Fetch one of the caller's notes.
pub async fn get_note(
    State(state): State<AppState>,
    auth: RequireAuth,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = path.map_err(invalid_path(INVALID_ID))?;
    state
        .notes
        .fetch_owned(id, auth.user.user_id)
        .await
        .map_err(ApiError::persistence(LOAD_FAILED))?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Partially update one of the caller's notes.
///
/// # Returns
/// - 200 OK with the updated note
/// - 400 Bad Request if `title` or `content` is present but blank
/// - 404 Not Found if the caller owns no such note
pub async fn update_note(
    State(state): State<AppState>,
    auth: RequireAuth,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = path.map_err(invalid_path(INVALID_ID))?;
    let Json(req) = payload.map_err(invalid_body(TITLE_CONTENT_REQUIRED))?;
    if req.title.as_deref().is_some_and(is_blank) || req.content.as_deref().is_some_and(is_blank)
    {
        return Err(ApiError::BadRequest(TITLE_CONTENT_REQUIRED.to_string()));
    }

    state
        .notes
        .update(id, auth.user.user_id, req)
        .await
        .map_err(ApiError::persistence(SAVE_FAILED))?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Delete one of the caller's notes.
///
/// # Returns
/// - 204 No Content when removed
/// - 404 Not Found if the caller owns no such note
pub async fn delete_note(
    State(state): State<AppState>,
    auth: RequireAuth,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(invalid_path(INVALID_ID))?;
    let removed = state
        .notes
        .delete(id, auth.user.user_id)
        .await
        .map_err(ApiError::persistence(DELETE_FAILED))?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
