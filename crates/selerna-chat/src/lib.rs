//! Reply dispatch for the Selerna avatar.
//!
//! Classifies a user message into a brand intent, resolves the scripted
//! reply, optionally overlays a model-generated reply, and attaches speech
//! audio, a lip-sync timeline, and a facial expression.

pub mod error;
pub mod expression;
pub mod lipsync;
pub mod llm;
pub mod overlay;
pub mod persona;
pub mod pipeline;
pub mod resolver;
pub mod router;
pub mod speech;
pub mod types;

pub use error::ChatError;
pub use expression::select_expression;
pub use lipsync::{lipsync_for, synthesize_cues};
pub use llm::{OpenAiChatClient, ReplyGenerator};
pub use overlay::{GenerativeOverlay, OverlayOutcome};
pub use pipeline::ReplyPipeline;
pub use resolver::{CannedEntry, ResolvedReply, ResponseResolver};
pub use router::{IntentRouter, IntentRule, FALLBACK_INTENT};
pub use speech::{ElevenLabsClient, SpeechAdapter, SpeechSynthesizer};
pub use types::{
    ChatEnvelope, ChatReply, ChatRequest, FacialExpression, LipSync, MouthCue, ReplySource,
    Viseme, ERROR_INTENT, IDLE_ANIMATION,
};
