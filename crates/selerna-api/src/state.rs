//! Application state shared across all route handlers.

use std::sync::Arc;

use selerna_chat::ReplyPipeline;
use selerna_core::config::SelernaConfig;

/// Shared application state.
///
/// Everything is read-only after startup, so fields are plain `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<SelernaConfig>,
    /// Reply pipeline shared by all chat requests.
    pub pipeline: Arc<ReplyPipeline>,
}

impl AppState {
    pub fn new(config: SelernaConfig, pipeline: ReplyPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
