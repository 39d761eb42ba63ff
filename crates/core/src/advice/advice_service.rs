use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use super::advice_model::{AdviceRequest, AdviceResponse, AdviceResult};
use crate::assets::WalletAddress;
use crate::balances::BalanceAggregator;
use crate::completion::CompletionSourceTrait;
use crate::errors::Result;
use crate::strategies::build_advice_prompt;

#[async_trait]
pub trait AdviceServiceTrait: Send + Sync {
    async fn ask(&self, request: AdviceRequest) -> AdviceResponse;
}

/// Answers a user question with the wallet's balances as context.
#[derive(Clone)]
pub struct AdviceService {
    aggregator: BalanceAggregator,
    completion_source: Arc<dyn CompletionSourceTrait>,
}

impl AdviceService {
    pub fn new(
        aggregator: BalanceAggregator,
        completion_source: Arc<dyn CompletionSourceTrait>,
    ) -> Self {
        Self {
            aggregator,
            completion_source,
        }
    }

    pub async fn try_ask(&self, request: &AdviceRequest) -> Result<AdviceResult> {
        let address = WalletAddress::parse(&request.wallet_address)?;
        let balances = self.aggregator.aggregate(&address).await?;

        let prompt = build_advice_prompt(
            self.aggregator.registry(),
            &address,
            &balances,
            &request.prompt,
        );
        let response = self.completion_source.complete(&prompt).await?;

        Ok(AdviceResult { response })
    }
}

#[async_trait]
impl AdviceServiceTrait for AdviceService {
    async fn ask(&self, request: AdviceRequest) -> AdviceResponse {
        let result = self.try_ask(&request).await;
        match &result {
            Ok(_) => info!("Advice request answered"),
            Err(err) => warn!("Advice request failed: {}", err),
        }
        result.into()
    }
}
