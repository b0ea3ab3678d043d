//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use resolver::ResolveError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// View resolution error.
    Resolve(ResolveError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Resolve(err) => resolve_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn resolve_error_to_response(err: ResolveError) -> (StatusCode, String) {
    match &err {
        ResolveError::MemberNotFound(_) | ResolveError::EventNotFound(_) => {
            (StatusCode::NOT_FOUND, err.to_string())
        }
        // Transient store failures are retryable; tell the client so.
        ResolveError::Store(store_err) => {
            tracing::error!(error = %store_err, "store access failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "scheduling store unavailable".to_string(),
            )
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        ApiError::Resolve(err)
    }
}
