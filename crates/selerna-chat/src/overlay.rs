//! Generative overlay: optionally replaces the canned reply with a model
//! reply.
//!
//! Any failure (no generator, transport error, timeout, empty output) keeps
//! the canned reply. Failures are logged and never surface to the caller.

use std::sync::Arc;

use crate::error::ChatError;
use crate::llm::ReplyGenerator;
use crate::persona;
use crate::types::ReplySource;

/// Default cap on generated reply length, in characters.
pub const DEFAULT_MAX_REPLY_CHARS: usize = 600;

/// Final reply text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOutcome {
    pub text: String,
    pub source: ReplySource,
}

/// Conditionally overlays a generated reply on the canned one.
#[derive(Clone)]
pub struct GenerativeOverlay {
    generator: Option<Arc<dyn ReplyGenerator>>,
    max_reply_chars: usize,
}

impl GenerativeOverlay {
    pub fn new(generator: Option<Arc<dyn ReplyGenerator>>, max_reply_chars: usize) -> Self {
        Self {
            generator,
            max_reply_chars,
        }
    }

    /// An overlay that always keeps the canned reply.
    pub fn disabled() -> Self {
        Self::new(None, DEFAULT_MAX_REPLY_CHARS)
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Make at most one generative call and decide the final reply.
    pub async fn apply(&self, user_text: &str, canned_reply: &str) -> OverlayOutcome {
        let canned = || OverlayOutcome {
            text: canned_reply.to_string(),
            source: ReplySource::Canned,
        };

        let Some(generator) = &self.generator else {
            return canned();
        };

        match generator.generate(persona::system_prompt(), user_text).await {
            Ok(raw) => {
                let text = cap_chars(&raw, self.max_reply_chars);
                if text.is_empty() {
                    tracing::warn!(error = %ChatError::EmptyReply, "Keeping canned reply");
                    return canned();
                }
                OverlayOutcome {
                    text,
                    source: ReplySource::Model,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model call failed; keeping canned reply");
                canned()
            }
        }
    }
}

impl Default for GenerativeOverlay {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Trim `text`, keep its first `max_chars` characters, then trim again.
pub fn cap_chars(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let end = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text[..end].trim().to_string()
}
