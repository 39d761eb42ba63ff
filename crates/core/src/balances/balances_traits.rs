use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::assets::WalletAddress;
use crate::errors::BalanceSourceError;

/// Reads on-chain quantities for a wallet.
///
/// Implementations return human-unit quantities, already scaled by the
/// asset's decimals.
#[async_trait]
pub trait BalanceSourceTrait: Send + Sync {
    /// Native currency balance (ETH on the supported networks).
    async fn fetch_native_balance(
        &self,
        address: &WalletAddress,
    ) -> Result<Decimal, BalanceSourceError>;

    /// Balance of the token deployed at `contract`, scaled by `decimals`.
    async fn fetch_token_balance(
        &self,
        address: &WalletAddress,
        contract: &str,
        decimals: u32,
    ) -> Result<Decimal, BalanceSourceError>;
}

/// Deterministic in-memory balance source.
///
/// Token balances are keyed by lowercase contract address. Contracts marked as
/// failing return a provider error. Every call is counted so tests can assert
/// that no network work happened.
#[derive(Debug, Default)]
pub struct StaticBalanceSource {
    native: Decimal,
    native_error: Option<BalanceSourceError>,
    tokens: HashMap<String, Decimal>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl StaticBalanceSource {
    pub fn new(native: Decimal) -> Self {
        Self {
            native,
            ..Default::default()
        }
    }

    pub fn with_token(mut self, contract: &str, quantity: Decimal) -> Self {
        self.tokens.insert(contract.to_lowercase(), quantity);
        self
    }

    pub fn with_failing_token(mut self, contract: &str) -> Self {
        self.failing.insert(contract.to_lowercase());
        self
    }

    pub fn with_native_error(mut self, error: BalanceSourceError) -> Self {
        self.native_error = Some(error);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceSourceTrait for StaticBalanceSource {
    async fn fetch_native_balance(
        &self,
        _address: &WalletAddress,
    ) -> Result<Decimal, BalanceSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.native_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.native),
        }
    }

    async fn fetch_token_balance(
        &self,
        _address: &WalletAddress,
        contract: &str,
        _decimals: u32,
    ) -> Result<Decimal, BalanceSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = contract.to_lowercase();
        if self.failing.contains(&key) {
            return Err(BalanceSourceError::Provider(format!(
                "token balance unavailable for {}",
                contract
            )));
        }
        Ok(self.tokens.get(&key).copied().unwrap_or(Decimal::ZERO))
    }
}
