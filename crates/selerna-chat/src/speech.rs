//! Speech synthesis capability.
//!
//! [`SpeechSynthesizer`] is the client seam; [`ElevenLabsClient`] talks to an
//! ElevenLabs-style `text-to-speech/{voice}` endpoint. [`SpeechAdapter`]
//! wraps an optional synthesizer and turns every failure into absent audio.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use selerna_core::config::{SpeechConfig, VoiceSettingsConfig};

use crate::error::ChatError;

/// Converts reply text to encoded audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ChatError>;
}

// =============================================================================
// ElevenLabsClient
// =============================================================================

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl From<&VoiceSettingsConfig> for VoiceSettings {
    fn from(c: &VoiceSettingsConfig) -> Self {
        Self {
            stability: c.stability,
            similarity_boost: c.similarity_boost,
            style: c.style,
            use_speaker_boost: c.use_speaker_boost,
        }
    }
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
    output_format: &'a str,
}

/// Single-shot text-to-speech client.
pub struct ElevenLabsClient {
    client: Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model_id: String,
    output_format: String,
    voice_settings: VoiceSettings,
}

impl ElevenLabsClient {
    /// Build a client from config. Returns `Ok(None)` unless both an API key
    /// and a voice id are configured.
    pub fn from_config(config: &SpeechConfig) -> Result<Option<Self>, ChatError> {
        if !config.is_configured() {
            return Ok(None);
        }
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::ClientSetup(e.to_string()))?;

        Ok(Some(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            output_format: config.output_format.clone(),
            voice_settings: VoiceSettings::from(&config.voice_settings),
        }))
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ChatError> {
        let url = format!("{}/text-to-speech/{}", self.base_url, self.voice_id);
        let body = SynthesisRequest {
            text,
            model_id: &self.model_id,
            voice_settings: &self.voice_settings,
            output_format: &self.output_format,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::SpeechRequest(e.to_string()))?;

        // Only a 200 carries audio; 204 and other 2xx codes count as failures.
        let status = response.status();
        if status != StatusCode::OK {
            let raw = response.text().await.unwrap_or_default();
            // Prefer the compact JSON rendering when the body parses.
            let body = serde_json::from_str::<serde_json::Value>(&raw)
                .map(|v| v.to_string())
                .unwrap_or(raw);
            return Err(ChatError::SpeechStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ChatError::SpeechRequest(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// SpeechAdapter
// =============================================================================

/// Optional speech capability whose failures are never fatal.
#[derive(Clone, Default)]
pub struct SpeechAdapter {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
}

impl SpeechAdapter {
    pub fn new(synthesizer: Option<Arc<dyn SpeechSynthesizer>>) -> Self {
        Self { synthesizer }
    }

    /// An adapter that never produces audio.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Synthesize `text`, or return `None` if speech is not configured, the
    /// text is empty, or the call fails.
    pub async fn synthesize(&self, text: &str) -> Option<Vec<u8>> {
        let synthesizer = self.synthesizer.as_ref()?;
        if text.is_empty() {
            return None;
        }

        match synthesizer.synthesize(text).await {
            Ok(audio) if audio.is_empty() => {
                tracing::warn!("Speech synthesis returned no audio");
                None
            }
            Ok(audio) => {
                tracing::debug!(bytes = audio.len(), "Speech synthesized");
                Some(audio)
            }
            Err(ChatError::SpeechStatus { status, body }) => {
                tracing::warn!(status, body = %body, "Speech synthesis rejected");
                None
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Speech synthesis failed");
                None
            }
        }
    }
}
