//! Caller profile and sign-out.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use intellinote_core::Profile;

use crate::{ApiError, AppState, RequireAuth};

/// The caller's display profile.
pub async fn get_profile(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<Json<Profile>, ApiError> {
    state
        .profiles
        .fetch(auth.user.user_id)
        .await
        .map_err(ApiError::persistence("Failed to load profile"))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
}

/// Revoke the session token the request was made with.
pub async fn logout(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .revoke(&auth.token)
        .await
        .map_err(ApiError::persistence("Failed to sign out"))?;
    info!(
        subsystem = "api",
        component = "auth",
        user_id = %auth.user.user_id,
        "Session revoked"
    );
    Ok(StatusCode::NO_CONTENT)
}
