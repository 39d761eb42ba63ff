//! AI error types.

use thiserror::Error;
use walli_core::errors::CompletionError;

/// AI errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid configuration value.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider name that isn't supported.
    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    /// Provider error (from rig-core or API).
    #[error("Provider error: {0}")]
    Provider(String),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::UnknownProvider(_) => "UNKNOWN_PROVIDER",
            AiError::Provider(_) => "PROVIDER_ERROR",
        }
    }
}

impl From<AiError> for CompletionError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::MissingApiKey(provider) => CompletionError::MissingApiKey(provider),
            AiError::Provider(msg) => CompletionError::Provider(msg),
            other => CompletionError::Provider(other.to_string()),
        }
    }
}
