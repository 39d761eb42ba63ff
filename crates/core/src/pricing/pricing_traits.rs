use std::collections::BTreeSet;

use async_trait::async_trait;

use super::pricing_model::PriceSet;
use crate::errors::PriceFetchError;

/// Supplies USD unit prices for a set of symbols.
///
/// Missing entries are allowed. An `Err` means the source could not be
/// reached at all.
#[async_trait]
pub trait PriceSourceTrait: Send + Sync {
    async fn fetch_prices(&self, symbols: &BTreeSet<String>) -> Result<PriceSet, PriceFetchError>;
}

/// Price source returning a fixed table, or a fixed error.
#[derive(Debug, Clone, Default)]
pub struct FixedPriceSource {
    prices: PriceSet,
    error: Option<PriceFetchError>,
}

impl FixedPriceSource {
    pub fn new(prices: PriceSet) -> Self {
        Self {
            prices,
            error: None,
        }
    }

    pub fn failing(error: PriceFetchError) -> Self {
        Self {
            prices: PriceSet::empty(),
            error: Some(error),
        }
    }
}

#[async_trait]
impl PriceSourceTrait for FixedPriceSource {
    async fn fetch_prices(&self, symbols: &BTreeSet<String>) -> Result<PriceSet, PriceFetchError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(self
            .prices
            .iter()
            .filter(|(symbol, _)| symbols.contains(*symbol))
            .map(|(symbol, price)| (symbol.to_string(), price))
            .collect())
    }
}
