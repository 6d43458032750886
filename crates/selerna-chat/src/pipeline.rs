//! Reply pipeline: wires routing, resolution, overlay, speech, lip-sync, and
//! expression into one call per inbound message.

use std::sync::Arc;

use selerna_core::config::SelernaConfig;

use crate::error::ChatError;
use crate::expression::select_expression;
use crate::lipsync::lipsync_for;
use crate::llm::{OpenAiChatClient, ReplyGenerator};
use crate::overlay::GenerativeOverlay;
use crate::resolver::ResponseResolver;
use crate::router::IntentRouter;
use crate::speech::{ElevenLabsClient, SpeechAdapter, SpeechSynthesizer};
use crate::types::{ChatEnvelope, ChatReply, IDLE_ANIMATION};

/// Composes avatar replies. Holds no per-request state and is shared across
/// concurrent requests.
#[derive(Clone)]
pub struct ReplyPipeline {
    router: &'static IntentRouter,
    resolver: &'static ResponseResolver,
    overlay: GenerativeOverlay,
    speech: SpeechAdapter,
}

impl ReplyPipeline {
    /// Create a pipeline over the brand tables with the given capabilities.
    pub fn new(overlay: GenerativeOverlay, speech: SpeechAdapter) -> Self {
        Self {
            router: IntentRouter::brand(),
            resolver: ResponseResolver::brand(),
            overlay,
            speech,
        }
    }

    /// Canned replies only: no model, no speech.
    pub fn canned_only() -> Self {
        Self::new(GenerativeOverlay::disabled(), SpeechAdapter::disabled())
    }

    /// Build the pipeline from configuration, enabling each outbound
    /// capability only when its credentials are present.
    pub fn from_config(config: &SelernaConfig) -> Result<Self, ChatError> {
        let generator = OpenAiChatClient::from_config(&config.model)?
            .map(|client| Arc::new(client) as Arc<dyn ReplyGenerator>);
        let synthesizer = ElevenLabsClient::from_config(&config.speech)?
            .map(|client| Arc::new(client) as Arc<dyn SpeechSynthesizer>);

        tracing::info!(
            model_enabled = generator.is_some(),
            speech_enabled = synthesizer.is_some(),
            "Reply pipeline configured"
        );

        Ok(Self::new(
            GenerativeOverlay::new(generator, config.model.max_reply_chars),
            SpeechAdapter::new(synthesizer),
        ))
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay.is_enabled()
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech.is_enabled()
    }

    /// Compose the reply envelope for one user message.
    ///
    /// An empty (or whitespace-only) message yields an envelope with no
    /// messages. Capability failures never escape: the reply degrades to
    /// canned text and absent audio instead.
    pub async fn respond(&self, message: &str) -> ChatEnvelope {
        let message = message.trim();
        if message.is_empty() {
            return ChatEnvelope::empty();
        }

        let intent = self.router.classify(message);
        let canned = self.resolver.resolve(intent);
        let outcome = self.overlay.apply(message, &canned.text).await;

        let audio = self.speech.synthesize(&outcome.text).await;
        let lipsync = lipsync_for(&outcome.text);
        let facial_expression = select_expression(&outcome.text.to_lowercase());

        tracing::info!(
            intent,
            source = %outcome.source,
            has_audio = audio.is_some(),
            cues = lipsync.mouth_cues.len(),
            "Reply composed"
        );

        ChatEnvelope::single(ChatReply {
            text: outcome.text,
            audio,
            lipsync,
            facial_expression,
            animation: IDLE_ANIMATION.to_string(),
            quick_replies: canned.quick_replies,
            intent: intent.to_string(),
            source: outcome.source,
        })
    }
}

impl Default for ReplyPipeline {
    fn default() -> Self {
        Self::canned_only()
    }
}
