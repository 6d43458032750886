//! Request and reply types shared by the pipeline and the HTTP layer.

use base64::Engine as _;
use serde::{Deserialize, Serialize, Serializer};

/// Animation tag sent with every reply.
pub const IDLE_ANIMATION: &str = "Idle";

/// Intent name reported on the degraded error reply.
pub const ERROR_INTENT: &str = "error";

const DEGRADED_TEXT: &str = "I hit a snag—let’s book a quick Discovery Call and get you moving.";
const DEGRADED_QUICK_REPLY: &str = "Book Your Discovery Call";

// =============================================================================
// Inbound
// =============================================================================

/// Inbound chat request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// Raw user utterance. Absent and empty are treated the same.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The message with surrounding whitespace removed, or `""`.
    pub fn trimmed_message(&self) -> &str {
        self.message.as_deref().map(str::trim).unwrap_or("")
    }
}

// =============================================================================
// Lip-sync
// =============================================================================

/// Mouth-shape category driving avatar lip animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viseme {
    /// Closed lips (P, B, M).
    A,
    /// Spread lips (I, E).
    C,
    /// Open jaw (AA).
    D,
    /// Rounded (O).
    E,
    /// Puckered (U).
    F,
}

/// One timed interval of the lip-sync timeline, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouthCue {
    pub start: f64,
    pub end: f64,
    pub value: Viseme,
}

/// Lip-sync payload in the shape the avatar client expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LipSync {
    #[serde(rename = "mouthCues")]
    pub mouth_cues: Vec<MouthCue>,
}

// =============================================================================
// Reply
// =============================================================================

/// Facial expression tag selected from the reply text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacialExpression {
    Smile,
    Concerned,
    #[default]
    Default,
}

/// Where the final reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Canned,
    Model,
    Error,
}

impl std::fmt::Display for ReplySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReplySource::Canned => "canned",
            ReplySource::Model => "model",
            ReplySource::Error => "error",
        };
        f.write_str(s)
    }
}

/// A fully composed avatar reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub text: String,
    /// Synthesized speech, serialized as base64 or `null`.
    #[serde(serialize_with = "serialize_audio")]
    pub audio: Option<Vec<u8>>,
    pub lipsync: LipSync,
    #[serde(rename = "facialExpression")]
    pub facial_expression: FacialExpression,
    pub animation: String,
    pub quick_replies: Vec<String>,
    pub intent: String,
    pub source: ReplySource,
}

impl ChatReply {
    /// The fixed reply used when a request cannot be processed.
    pub fn degraded() -> Self {
        Self {
            text: DEGRADED_TEXT.to_string(),
            audio: None,
            lipsync: LipSync::default(),
            facial_expression: FacialExpression::Default,
            animation: IDLE_ANIMATION.to_string(),
            quick_replies: vec![DEGRADED_QUICK_REPLY.to_string()],
            intent: ERROR_INTENT.to_string(),
            source: ReplySource::Error,
        }
    }
}

fn serialize_audio<S>(audio: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match audio {
        Some(bytes) => {
            serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
        }
        None => serializer.serialize_none(),
    }
}

/// Outbound response body: zero or one reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatEnvelope {
    pub messages: Vec<ChatReply>,
}

impl ChatEnvelope {
    /// Response for an empty or missing message.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(reply: ChatReply) -> Self {
        Self {
            messages: vec![reply],
        }
    }

    /// Envelope carrying [`ChatReply::degraded`].
    pub fn degraded() -> Self {
        Self::single(ChatReply::degraded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_message() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "  hi there \n"}"#).unwrap();
        assert_eq!(req.trimmed_message(), "hi there");
    }

    #[test]
    fn test_request_missing_or_null_message() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.trimmed_message(), "");

        let req: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert_eq!(req.trimmed_message(), "");
    }

    #[test]
    fn test_request_rejects_non_string_message() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"message": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_degraded_reply_shape() {
        let json = serde_json::to_value(ChatEnvelope::degraded()).unwrap();
        let msg = &json["messages"][0];
        assert!(msg["text"].as_str().unwrap().starts_with("I hit a snag"));
        assert!(msg["audio"].is_null());
        assert_eq!(msg["lipsync"]["mouthCues"].as_array().unwrap().len(), 0);
        assert_eq!(msg["facialExpression"], "default");
        assert_eq!(msg["animation"], "Idle");
        assert_eq!(msg["quick_replies"][0], "Book Your Discovery Call");
        assert_eq!(msg["intent"], "error");
        assert_eq!(msg["source"], "error");
    }

    #[test]
    fn test_audio_serializes_as_base64() {
        let mut reply = ChatReply::degraded();
        reply.audio = Some(b"ID3".to_vec());
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["audio"], "SUQz");
    }

    #[test]
    fn test_mouth_cue_wire_format() {
        let lipsync = LipSync {
            mouth_cues: vec![MouthCue {
                start: 0.0,
                end: 0.08,
                value: Viseme::D,
            }],
        };
        let json = serde_json::to_value(&lipsync).unwrap();
        assert_eq!(json["mouthCues"][0]["value"], "D");
        assert_eq!(json["mouthCues"][0]["end"], 0.08);
    }

    #[test]
    fn test_empty_envelope() {
        let json = serde_json::to_string(&ChatEnvelope::empty()).unwrap();
        assert_eq!(json, r#"{"messages":[]}"#);
    }

    #[test]
    fn test_reply_source_display_matches_wire() {
        for source in [ReplySource::Canned, ReplySource::Model, ReplySource::Error] {
            let wire = serde_json::to_value(source).unwrap();
            assert_eq!(wire, source.to_string());
        }
    }
}
