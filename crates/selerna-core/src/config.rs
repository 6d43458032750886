use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SelernaError};

/// Top-level configuration for the Selerna avatar service.
///
/// Loaded from `~/.selerna/config.toml` by default, then overlaid with
/// environment variables (see [`SelernaConfig::apply_env_overrides`]).
/// Missing credentials are not an error: the service degrades to canned
/// replies and silent avatars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelernaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl SelernaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SelernaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SelernaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Overlay credentials and model/voice selection from the process
    /// environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Overlay values from an arbitrary key lookup. Empty values are ignored.
    ///
    /// Recognised keys: `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`,
    /// `ELEVENLABS_API_KEY`, `ELEVENLABS_VOICE_ID`.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("OPENAI_API_KEY") {
            self.model.api_key = Some(key);
        }
        if let Some(model) = get("OPENAI_MODEL") {
            self.model.model = model;
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            self.model.base_url = url;
        }
        if let Some(key) = get("ELEVENLABS_API_KEY") {
            self.speech.api_key = Some(key);
        }
        if let Some(voice) = get("ELEVENLABS_VOICE_ID") {
            self.speech.voice_id = voice;
        }
    }
}

/// General server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// HTTP port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Browser origins allowed by CORS. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

/// Generative-model (OpenAI-compatible chat completions) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key. When absent the generative overlay is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Base URL of the chat completions API.
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Generated replies are truncated to this many characters.
    pub max_reply_chars: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.5,
            max_tokens: 220,
            max_reply_chars: 600,
            timeout_secs: 30,
        }
    }
}

/// Speech synthesis (ElevenLabs-style) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// API key. When absent no audio is produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Voice identifier.
    pub voice_id: String,
    /// Base URL of the text-to-speech API.
    pub base_url: String,
    /// Synthesis model identifier.
    pub model_id: String,
    /// Output audio encoding.
    pub output_format: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Voice-shaping parameters.
    #[serde(default)]
    pub voice_settings: VoiceSettingsConfig,
}

impl SpeechConfig {
    /// Whether both a credential and a voice are present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
            && !self.voice_id.trim().is_empty()
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            voice_id: "Bella".to_string(),
            base_url: "https://api.elevenlabs.io/v1".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            output_format: "mp3_44100_128".to_string(),
            timeout_secs: 60,
            voice_settings: VoiceSettingsConfig::default(),
        }
    }
}

/// Voice-shaping weights sent with every synthesis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettingsConfig {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettingsConfig {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.85,
            style: 0.22,
            use_speaker_boost: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SelernaConfig::default();
        assert_eq!(config.general.port, 8000);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.model.max_tokens, 220);
        assert_eq!(config.model.max_reply_chars, 600);
        assert_eq!(config.speech.voice_id, "Bella");
        assert_eq!(config.speech.model_id, "eleven_multilingual_v2");
        assert_eq!(config.speech.output_format, "mp3_44100_128");
        assert_eq!(config.speech.timeout_secs, 60);
        assert!(config.speech.voice_settings.use_speaker_boost);
    }

    #[test]
    fn test_defaults_have_no_credentials() {
        let config = SelernaConfig::default();
        assert!(!config.model.is_configured());
        assert!(!config.speech.is_configured());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
port = 9090
log_level = "debug"
allowed_origins = ["https://selernagroup.com"]

[model]
api_key = "sk-test"
model = "gpt-4o"
temperature = 0.2

[speech]
voice_id = "Rachel"

[speech.voice_settings]
stability = 0.7
"#;
        let file = create_temp_config(content);
        let config = SelernaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.port, 9090);
        assert_eq!(config.general.allowed_origins, vec!["https://selernagroup.com"]);
        assert!(config.model.is_configured());
        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.model.max_tokens, 220);
        assert_eq!(config.speech.voice_id, "Rachel");
        assert!((config.speech.voice_settings.stability - 0.7).abs() < f32::EPSILON);
        assert!((config.speech.voice_settings.style - 0.22).abs() < f32::EPSILON);
        assert!(!config.speech.is_configured());
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = SelernaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.port, 8000);
        assert_eq!(config.speech.voice_id, "Bella");
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = SelernaConfig::load(file.path());
        assert!(matches!(result, Err(SelernaError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SelernaConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.port, 8000);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = SelernaConfig::default();
        config.general.port = 7000;
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = SelernaConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.port, 7000);
        assert!(reloaded.model.api_key.is_none());
    }

    #[test]
    fn test_env_overrides_apply_credentials() {
        let mut config = SelernaConfig::default();
        config.apply_overrides_from(lookup(&[
            ("OPENAI_API_KEY", "sk-live"),
            ("OPENAI_MODEL", "gpt-4.1-mini"),
            ("ELEVENLABS_API_KEY", "xi-key"),
            ("ELEVENLABS_VOICE_ID", "voice-123"),
        ]));

        assert_eq!(config.model.api_key.as_deref(), Some("sk-live"));
        assert_eq!(config.model.model, "gpt-4.1-mini");
        assert_eq!(config.speech.api_key.as_deref(), Some("xi-key"));
        assert_eq!(config.speech.voice_id, "voice-123");
        assert!(config.model.is_configured());
        assert!(config.speech.is_configured());
    }

    #[test]
    fn test_env_overrides_ignore_empty_values() {
        let mut config = SelernaConfig::default();
        config.apply_overrides_from(lookup(&[
            ("OPENAI_API_KEY", "  "),
            ("ELEVENLABS_VOICE_ID", ""),
        ]));

        assert!(config.model.api_key.is_none());
        assert_eq!(config.speech.voice_id, "Bella");
    }

    #[test]
    fn test_speech_requires_voice() {
        let mut speech = SpeechConfig {
            api_key: Some("xi-key".to_string()),
            ..SpeechConfig::default()
        };
        assert!(speech.is_configured());
        speech.voice_id = String::new();
        assert!(!speech.is_configured());
    }
}
