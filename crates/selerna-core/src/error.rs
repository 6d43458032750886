use thiserror::Error;

/// Top-level error type for the Selerna avatar service.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for SelernaError` (or the reverse) so that the `?`
/// operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SelernaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SelernaError {
    fn from(err: toml::de::Error) -> Self {
        SelernaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SelernaError {
    fn from(err: toml::ser::Error) -> Self {
        SelernaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SelernaError {
    fn from(err: serde_json::Error) -> Self {
        SelernaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Selerna operations.
pub type Result<T> = std::result::Result<T, SelernaError>;
