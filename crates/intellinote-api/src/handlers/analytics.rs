//! Aggregate statistics over the caller's notes.

use axum::{extract::State, Json};
use tracing::debug;

use intellinote_core::NoteAnalytics;

use crate::{ApiError, AppState, RequireAuth};

/// Recompute analytics from the caller's current notes.
pub async fn get_analytics(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<Json<NoteAnalytics>, ApiError> {
    let notes = state
        .notes
        .list_for_owner(auth.user.user_id)
        .await
        .map_err(ApiError::persistence("Failed to load notes"))?;
    let analytics = NoteAnalytics::from_notes(&notes);
    debug!(
        subsystem = "api",
        component = "analytics",
        total_notes = analytics.total_notes,
        folder_count = analytics.folder_count,
        "Computed analytics"
    );
    Ok(Json(analytics))
}
