//! Error types for the reply pipeline's outbound capabilities.

use selerna_core::error::SelernaError;

/// Errors from the generative-model and speech-synthesis clients.
///
/// None of these reach the end user: the overlay and the speech adapter
/// log them and fall back to the canned reply or to silent audio.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("model request failed: {0}")]
    ModelRequest(String),
    #[error("model returned status {status}: {body}")]
    ModelStatus { status: u16, body: String },
    #[error("model returned an empty reply")]
    EmptyReply,
    #[error("speech request failed: {0}")]
    SpeechRequest(String),
    #[error("speech synthesis returned status {status}: {body}")]
    SpeechStatus { status: u16, body: String },
    #[error("client setup failed: {0}")]
    ClientSetup(String),
}

/// Client setup failures are configuration problems; everything else is an
/// upstream API failure.
impl From<ChatError> for SelernaError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::ClientSetup(msg) => SelernaError::Config(msg),
            other => SelernaError::Api(other.to_string()),
        }
    }
}
