use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// USD value per asset plus the portfolio total.
///
/// Every per-asset value is already rounded to cents, and `total` is the
/// rounded sum of those rounded values. Field names match the response
/// shape, so the struct is flattened into `RebalanceResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    #[serde(rename = "usd_value")]
    pub values: BTreeMap<String, Decimal>,
    #[serde(rename = "total_usd_value")]
    pub total: Decimal,
}

impl Valuation {
    /// USD value of `symbol`, zero when it was not valued.
    pub fn value_of(&self, symbol: &str) -> Decimal {
        self.values.get(symbol).copied().unwrap_or(Decimal::ZERO)
    }
}
