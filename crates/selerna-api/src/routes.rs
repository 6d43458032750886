//! Router setup with the API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression, and panic
//! recovery around the chat and health handlers.

use std::any::Any;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use selerna_core::config::{GeneralConfig, SelernaConfig};
use selerna_core::error::SelernaError;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Largest accepted request body. Larger bodies get the degraded reply.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.general);

    Router::new()
        .route(
            "/chat",
            post(handlers::chat).fallback(handlers::chat_method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the browser widget: the configured origins, or any origin when
/// none are configured.
fn cors_layer(general: &GeneralConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = general
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(AnyOrigin)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Render any handler panic as the degraded reply.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Start the HTTP server on the configured address.
pub async fn start_server(config: &SelernaConfig, state: AppState) -> Result<(), SelernaError> {
    let addr = format!("{}:{}", config.general.bind_address, config.general.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SelernaError::Api(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| SelernaError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
