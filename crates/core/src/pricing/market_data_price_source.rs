use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use walli_market_data::{MarketDataError, MarketDataProvider};

use super::pricing_model::PriceSet;
use super::pricing_traits::PriceSourceTrait;
use crate::constants::PRICE_QUOTE_CURRENCY;
use crate::errors::PriceFetchError;

/// Price source backed by a market data provider.
///
/// Only an unreachable provider is an error. A provider that answers with a
/// rate limit, an error status or an unparseable body degrades to an empty
/// `PriceSet`, so every asset is valued at zero.
#[derive(Clone)]
pub struct MarketDataPriceSource {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketDataPriceSource {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl PriceSourceTrait for MarketDataPriceSource {
    async fn fetch_prices(&self, symbols: &BTreeSet<String>) -> Result<PriceSet, PriceFetchError> {
        let requested: Vec<String> = symbols.iter().cloned().collect();

        let quotes = match self
            .provider
            .get_latest_prices(&requested, PRICE_QUOTE_CURRENCY)
            .await
        {
            Ok(quotes) => quotes,
            Err(err) => return degrade_or_surface(self.provider.id(), err),
        };

        let prices: PriceSet = quotes
            .into_iter()
            .filter(|quote| symbols.contains(&quote.symbol))
            .filter_map(|quote| {
                if quote.price < Decimal::ZERO {
                    warn!(
                        "Dropping negative {} price {} from {}",
                        quote.symbol, quote.price, quote.source
                    );
                    None
                } else {
                    Some((quote.symbol, quote.price))
                }
            })
            .collect();

        debug!(
            "Fetched {} of {} prices from {}",
            prices.len(),
            symbols.len(),
            self.provider.id()
        );
        Ok(prices)
    }
}

fn degrade_or_surface(provider: &str, err: MarketDataError) -> Result<PriceSet, PriceFetchError> {
    if err.failure_class().is_transport() {
        return Err(PriceFetchError {
            provider: provider.to_string(),
            message: err.to_string(),
        });
    }
    warn!(
        "Price provider {} returned an unusable answer, valuing all assets at 0: {}",
        provider, err
    );
    Ok(PriceSet::empty())
}
