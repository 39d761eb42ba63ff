use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Symbol to decimal quantity held by a wallet.
///
/// Built once per request by the aggregator and never mutated afterwards,
/// so only read accessors are exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSet(BTreeMap<String, Decimal>);

impl BalanceSet {
    pub fn get(&self, symbol: &str) -> Option<Decimal> {
        self.0.get(symbol).copied()
    }

    /// Quantity for `symbol`, zero when the wallet holds none.
    pub fn quantity(&self, symbol: &str) -> Decimal {
        self.get(symbol).unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(symbol, qty)| (symbol.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for BalanceSet {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
