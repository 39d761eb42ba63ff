use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::rebalance::FailureResponse;

/// Input of an advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub wallet_address: String,
    #[serde(default)]
    pub prompt: String,
}

/// The model's answer, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AdviceResponse {
    Success(AdviceResult),
    Failure(FailureResponse),
}

impl From<Result<AdviceResult>> for AdviceResponse {
    fn from(result: Result<AdviceResult>) -> Self {
        match result {
            Ok(result) => AdviceResponse::Success(result),
            Err(err) => AdviceResponse::Failure(err.into()),
        }
    }
}
