//! Bearer session authentication.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{debug, error};

use intellinote_core::{logging, SessionUser};

use crate::{ApiError, AppState};

/// Extractor that requires a verified session.
///
/// Runs before any body extractor, so unauthenticated requests are rejected
/// without reading the body or reaching a backend.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    pub user: SessionUser,
    /// The bearer token the session was verified from.
    pub token: String,
}

/// Token from an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[axum::async_trait]
impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            debug!(subsystem = "api", component = "auth", "Missing bearer token");
            return Err(ApiError::Unauthorized);
        };

        let user = match state.sessions.verify(token).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(subsystem = "api", component = "auth", "Unknown or expired session");
                return Err(ApiError::Unauthorized);
            }
            Err(e) => {
                error!(subsystem = "api", component = "auth", error = %e, "Session lookup failed");
                return Err(ApiError::Unauthorized);
            }
        };

        tracing::Span::current().record(logging::USER_ID, tracing::field::display(user.user_id));

        Ok(RequireAuth {
            user,
            token: token.to_string(),
        })
    }
}
