//! Selerna API crate - axum HTTP surface for the avatar chat widget.
//!
//! Exposes `POST /chat` for reply dispatch and `GET /health` for liveness.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
