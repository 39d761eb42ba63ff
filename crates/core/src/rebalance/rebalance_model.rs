use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::balances::BalanceSet;
use crate::errors::{Error, FailureKind};
use crate::portfolio::valuation::Valuation;
use crate::pricing::PriceSet;
use crate::strategies::StrategyRecord;

/// Input of a rebalance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebalanceRequest {
    pub wallet_address: String,
    #[serde(default)]
    pub prompt: String,
}

/// Successful pipeline output.
///
/// Serializes as `{balances, usd_value, total_usd_value, prices, strategies,
/// raw_agent_response, generated_at}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceResult {
    pub balances: BalanceSet,
    #[serde(flatten)]
    pub valuation: Valuation,
    pub prices: PriceSet,
    pub strategies: Vec<StrategyRecord>,
    pub raw_agent_response: String,
    pub generated_at: DateTime<Utc>,
}

/// `{error}` body returned for any failed request.
///
/// `kind` only drives the HTTP status and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub error: String,
    #[serde(skip)]
    pub kind: FailureKind,
}

impl From<Error> for FailureResponse {
    fn from(err: Error) -> Self {
        Self {
            kind: err.failure_kind(),
            error: err.to_string(),
        }
    }
}

/// Either the full result or an error message, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RebalanceResponse {
    Success(Box<RebalanceResult>),
    Failure(FailureResponse),
}

impl RebalanceResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, RebalanceResponse::Success(_))
    }
}

impl From<crate::errors::Result<RebalanceResult>> for RebalanceResponse {
    fn from(result: crate::errors::Result<RebalanceResult>) -> Self {
        match result {
            Ok(result) => RebalanceResponse::Success(Box::new(result)),
            Err(err) => RebalanceResponse::Failure(err.into()),
        }
    }
}
