use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::balances_model::BalanceSet;
use super::balances_traits::BalanceSourceTrait;
use crate::assets::{Asset, AssetRegistry, WalletAddress};
use crate::errors::{BalanceFetchError, BalanceSourceError};

/// Fans out one balance query per registered asset and joins the results.
///
/// The aggregation is all-or-nothing: a single failing asset fails the whole
/// call, and no partial `BalanceSet` is ever produced.
#[derive(Clone)]
pub struct BalanceAggregator {
    registry: AssetRegistry,
    source: Arc<dyn BalanceSourceTrait>,
}

impl BalanceAggregator {
    pub fn new(registry: AssetRegistry, source: Arc<dyn BalanceSourceTrait>) -> Self {
        Self { registry, source }
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub async fn aggregate(
        &self,
        address: &WalletAddress,
    ) -> Result<BalanceSet, BalanceFetchError> {
        debug!(
            "Fetching {} balances for {}",
            self.registry.assets().len(),
            address.short()
        );

        let futures = self
            .registry
            .assets()
            .iter()
            .map(|asset| self.fetch_one(address, asset));

        // join_all keeps input order, so the first error below is the first
        // failing asset in registry order.
        let results = join_all(futures).await;

        let mut balances = Vec::with_capacity(results.len());
        for (asset, result) in self.registry.assets().iter().zip(results) {
            match result {
                Ok(quantity) if quantity < Decimal::ZERO => {
                    warn!(
                        "{} balance source returned negative quantity {}",
                        asset.symbol, quantity
                    );
                    return Err(BalanceFetchError::new(
                        &asset.symbol,
                        BalanceSourceError::InvalidResponse(format!(
                            "negative quantity {}",
                            quantity
                        )),
                    ));
                }
                Ok(quantity) => balances.push((asset.symbol.clone(), quantity)),
                Err(source) => {
                    warn!(
                        "Failed to fetch {} balance for {}: {}",
                        asset.symbol,
                        address.short(),
                        source
                    );
                    return Err(BalanceFetchError::new(&asset.symbol, source));
                }
            }
        }

        Ok(balances.into_iter().collect())
    }

    async fn fetch_one(
        &self,
        address: &WalletAddress,
        asset: &Asset,
    ) -> Result<Decimal, BalanceSourceError> {
        match asset.contract.as_deref() {
            None => self.source.fetch_native_balance(address).await,
            Some(contract) => {
                self.source
                    .fetch_token_balance(address, contract, asset.decimals)
                    .await
            }
        }
    }
}
