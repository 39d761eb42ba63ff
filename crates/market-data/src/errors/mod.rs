//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`FailureClass`]: Whether a failure means the provider was unreachable or
//!   answered with something unusable

mod failure;

pub use failure::FailureClass;

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// None of the requested symbols is known to the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider's body could not be understood.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use walli_market_data::errors::{FailureClass, MarketDataError};
    ///
    /// let error = MarketDataError::Timeout { provider: "COINGECKO".to_string() };
    /// assert_eq!(error.failure_class(), FailureClass::Transport);
    ///
    /// let error = MarketDataError::RateLimited { provider: "COINGECKO".to_string() };
    /// assert_eq!(error.failure_class(), FailureClass::Unusable);
    /// ```
    pub fn failure_class(&self) -> FailureClass {
        match self {
            // The provider could not be reached at all
            Self::Timeout { .. } => FailureClass::Transport,
            Self::Network(e) if e.is_timeout() || e.is_connect() || e.is_request() => {
                FailureClass::Transport
            }

            // The provider answered, but not with usable prices
            Self::SymbolNotFound(_)
            | Self::RateLimited { .. }
            | Self::ProviderError { .. }
            | Self::ValidationFailed { .. }
            | Self::Network(_) => FailureClass::Unusable,
        }
    }

    /// The provider this error came from, when known.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::RateLimited { provider }
            | Self::Timeout { provider }
            | Self::ProviderError { provider, .. } => Some(provider),
            _ => None,
        }
    }
}
