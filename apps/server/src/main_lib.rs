use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use walli_ai::LlmCompletionSource;
use walli_chain::EtherscanClient;
use walli_core::{
    advice::{AdviceService, AdviceServiceTrait},
    balances::BalanceAggregator,
    pricing::MarketDataPriceSource,
    rebalance::{RebalanceService, RebalanceServiceTrait},
    AssetRegistry,
};
use walli_market_data::CoinGeckoProvider;

pub struct AppState {
    pub rebalance_service: Arc<dyn RebalanceServiceTrait>,
    pub advice_service: Arc<dyn AdviceServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("WALLI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wire the real collaborators for the configured network.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let registry = AssetRegistry::for_network(config.network);
    tracing::info!(
        "Tracking {} on {} (chain id {})",
        registry.symbols().join(", "),
        config.network,
        config.network.chain_id()
    );

    let balance_source = Arc::new(EtherscanClient::new(
        &config.etherscan_base_url,
        &config.etherscan_api_key,
        config.network,
    )?);
    let aggregator = BalanceAggregator::new(registry, balance_source);

    let price_provider = Arc::new(CoinGeckoProvider::new(config.coingecko_api_key.clone()));
    let price_source = Arc::new(MarketDataPriceSource::new(price_provider));

    let completion_source = Arc::new(LlmCompletionSource::new(config.llm.clone())?);
    tracing::info!(
        "Completions via {} ({})",
        config.llm.provider,
        config.llm.model
    );

    let rebalance_service = Arc::new(RebalanceService::new(
        aggregator.clone(),
        price_source,
        completion_source.clone(),
    ));
    let advice_service = Arc::new(AdviceService::new(aggregator, completion_source));

    Ok(Arc::new(AppState {
        rebalance_service,
        advice_service,
    }))
}
