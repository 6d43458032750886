//! API error types and response formatting.
//!
//! Chat failures never expose internals: malformed requests and internal
//! faults both render the degraded reply envelope with a 500 status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use selerna_chat::ChatEnvelope;

/// Body for responses that carry only a detail string.
#[derive(Debug, Serialize)]
pub struct DetailBody {
    pub detail: String,
}

/// API error type that maps to HTTP status codes and response bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not a valid chat request.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    /// Unexpected failure while composing a reply, including handler panics.
    #[error("internal error: {0}")]
    Internal(String),
    /// `/chat` called with a method other than POST.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedRequest(msg) => {
                tracing::error!(error = %msg, "Rejected malformed chat request");
                degraded_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Chat request failed");
                degraded_response()
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(DetailBody {
                    detail: "POST only".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// `500` carrying the degraded reply envelope.
fn degraded_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatEnvelope::degraded())).into_response()
}

impl From<axum::extract::rejection::BytesRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::BytesRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedRequest(err.to_string())
    }
}
