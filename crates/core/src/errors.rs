//! Core error types for the rebalance pipeline.
//!
//! Every collaborator failure is funnelled into [`Error`] and converted exactly
//! once, at the orchestrator boundary, into a `{error}` response. Nothing in this
//! crate retries.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BalanceFetch(#[from] BalanceFetchError),

    #[error("{0}")]
    PriceFetch(#[from] PriceFetchError),

    #[error("{0}")]
    Completion(#[from] CompletionError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// How a failed request should be reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureKind {
    /// The request itself was malformed.
    InvalidInput,
    /// A collaborator (chain, prices, model) failed.
    #[default]
    Upstream,
    /// The service is misconfigured.
    Internal,
}

impl Error {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::Validation(_) => FailureKind::InvalidInput,
            Error::BalanceFetch(_) | Error::PriceFetch(_) | Error::Completion(_) => {
                FailureKind::Upstream
            }
            Error::InvalidConfigValue(_) => FailureKind::Internal,
        }
    }
}

/// Validation errors for request input and static configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid wallet address '{0}': expected 0x followed by 40 hex digits")]
    InvalidWalletAddress(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

/// Failure reported by a balance source for a single lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceSourceError {
    /// The request never produced a usable HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream service answered with an error status.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The upstream payload could not be turned into a quantity.
    #[error("Invalid balance response: {0}")]
    InvalidResponse(String),
}

/// A per-asset balance lookup failed; the whole aggregation is aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {symbol} balance: {source}")]
pub struct BalanceFetchError {
    /// Symbol of the asset whose lookup failed.
    pub symbol: String,
    /// Underlying cause reported by the balance source.
    pub source: BalanceSourceError,
}

impl BalanceFetchError {
    pub fn new(symbol: impl Into<String>, source: BalanceSourceError) -> Self {
        Self {
            symbol: symbol.into(),
            source,
        }
    }
}

/// The price source could not be reached at all.
///
/// Degraded answers (rate limits, unusable payloads) never produce this error;
/// they are turned into an empty [`crate::pricing::PriceSet`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Price source {provider} unreachable: {message}")]
pub struct PriceFetchError {
    pub provider: String,
    pub message: String,
}

/// The completion source failed to produce a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    #[error("Completion provider error: {0}")]
    Provider(String),
}

impl CompletionError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
