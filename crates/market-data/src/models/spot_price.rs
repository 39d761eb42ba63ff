use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Currency;

/// Latest unit price of one symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    /// Wallet-facing ticker, e.g. `ETH`
    pub symbol: String,

    /// Price of one unit in `currency`
    pub price: Decimal,

    /// Quote currency
    pub currency: Currency,

    /// When the price was fetched
    pub timestamp: DateTime<Utc>,

    /// Source of the price (COINGECKO, ...)
    pub source: String,
}

impl SpotPrice {
    pub fn new(symbol: impl Into<String>, price: Decimal, currency: &str, source: &str) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            currency: currency.to_string(),
            timestamp: Utc::now(),
            source: source.to_string(),
        }
    }
}
