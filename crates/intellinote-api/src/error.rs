//! HTTP error responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use intellinote_core::Error;

/// Errors returned by handlers. Every variant renders as `{"error": msg}`.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge,
    ServiceUnavailable(String),
    GenerationFailed(String),
    PersistenceFailed(String),
}

impl ApiError {
    /// Log a store error and replace it with a static client message.
    pub fn persistence(message: &'static str) -> impl FnOnce(Error) -> ApiError {
        move |err| {
            error!(subsystem = "api", error = %err, "{}", message);
            ApiError::PersistenceFailed(message.to_string())
        }
    }

    /// Log a generation error and replace it with a static client message.
    pub fn generation(message: &'static str) -> impl FnOnce(Error) -> ApiError {
        move |err| {
            error!(subsystem = "api", component = "ai_routes", error = %err, "{}", message);
            ApiError::GenerationFailed(message.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::GenerationFailed(_) | ApiError::PersistenceFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Map a JSON body rejection to a 400 carrying the route's validation message.
///
/// Bodies cut off by the size limit keep their 413.
pub fn invalid_body(message: &'static str) -> impl FnOnce(JsonRejection) -> ApiError {
    move |rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        tracing::debug!(
            subsystem = "api",
            rejection = %rejection.body_text(),
            "Rejected request body"
        );
        ApiError::BadRequest(message.to_string())
    }
}

/// Map a path rejection (e.g. a malformed id) to a 400 with `message`.
pub fn invalid_path(message: &'static str) -> impl FnOnce(PathRejection) -> ApiError {
    move |rejection| {
        tracing::debug!(
            subsystem = "api",
            rejection = %rejection.body_text(),
            "Rejected path parameter"
        );
        ApiError::BadRequest(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::PayloadTooLarge => "Request body too large".to_string(),
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::GenerationFailed(msg)
            | ApiError::PersistenceFailed(msg) => msg,
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
