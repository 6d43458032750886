//! Route handler functions for the chat and health endpoints.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use selerna_chat::{ChatEnvelope, ChatRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /chat - compose the avatar reply for one user message.
///
/// The raw body is parsed here rather than through the `Json` extractor so
/// that any malformed or oversized payload renders the degraded reply
/// instead of axum's default rejection.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatEnvelope>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        let body = body?;
        let request: ChatRequest = serde_json::from_slice(&body)?;
        let message = request.trimmed_message();
        tracing::debug!(chars = message.chars().count(), "Chat request received");

        let envelope = state.pipeline.respond(message).await;
        Ok::<_, ApiError>(Json(envelope))
    }
    .instrument(span)
    .await
}

/// Any non-POST method on /chat.
pub async fn chat_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// GET /health - liveness check.
pub async fn health() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "ok")
}
