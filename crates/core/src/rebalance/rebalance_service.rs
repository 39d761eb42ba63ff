use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

use super::rebalance_model::{RebalanceRequest, RebalanceResponse, RebalanceResult};
use super::rebalance_traits::RebalanceServiceTrait;
use crate::assets::WalletAddress;
use crate::balances::BalanceAggregator;
use crate::completion::CompletionSourceTrait;
use crate::errors::Result;
use crate::portfolio::valuation::calculate_valuation;
use crate::pricing::PriceSourceTrait;
use crate::strategies::{build_rebalance_prompt, StrategyExtractor, StrategyFormat};

/// Runs aggregate → value → prompt → complete → extract for one wallet.
#[derive(Clone)]
pub struct RebalanceService {
    aggregator: BalanceAggregator,
    price_source: Arc<dyn PriceSourceTrait>,
    completion_source: Arc<dyn CompletionSourceTrait>,
    extractor: StrategyExtractor,
}

impl RebalanceService {
    pub fn new(
        aggregator: BalanceAggregator,
        price_source: Arc<dyn PriceSourceTrait>,
        completion_source: Arc<dyn CompletionSourceTrait>,
    ) -> Self {
        Self {
            aggregator,
            price_source,
            completion_source,
            extractor: StrategyExtractor::default(),
        }
    }

    pub fn with_format(mut self, format: StrategyFormat) -> Self {
        self.extractor = StrategyExtractor::new(format);
        self
    }

    /// The pipeline with errors still typed.
    pub async fn try_rebalance(&self, request: &RebalanceRequest) -> Result<RebalanceResult> {
        let address = WalletAddress::parse(&request.wallet_address)?;
        let symbols = self.aggregator.registry().symbol_set();

        // Prices only depend on the static symbol set, so they are fetched
        // while the balances are being aggregated.
        let (balances, prices) = futures::join!(
            self.aggregator.aggregate(&address),
            self.price_source.fetch_prices(&symbols)
        );
        let balances = balances?;
        let prices = prices?;

        let valuation = calculate_valuation(&balances, &prices);
        debug!(
            "Valued {} at ${} across {} assets",
            address.short(),
            valuation.total,
            valuation.values.len()
        );

        let prompt = build_rebalance_prompt(
            self.aggregator.registry(),
            &balances,
            &valuation,
            &request.prompt,
            self.extractor.format(),
        );
        let raw_agent_response = self.completion_source.complete(&prompt).await?;
        let strategies = self.extractor.extract(&raw_agent_response);

        if strategies.is_empty() {
            warn!("Completion for {} yielded no strategies", address.short());
        }

        Ok(RebalanceResult {
            balances,
            valuation,
            prices,
            strategies,
            raw_agent_response,
            generated_at: Utc::now(),
        })
    }
}

#[async_trait]
impl RebalanceServiceTrait for RebalanceService {
    async fn rebalance(&self, request: RebalanceRequest) -> RebalanceResponse {
        let result = self.try_rebalance(&request).await;
        match &result {
            Ok(res) => info!("Rebalance produced {} strategies", res.strategies.len()),
            Err(err) => warn!("Rebalance failed: {}", err),
        }
        result.into()
    }
}
