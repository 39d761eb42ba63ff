//! Asset domain models.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::assets_constants::*;
use crate::constants::MAX_ASSET_DECIMALS;
use crate::errors::{Error, Result, ValidationError};

/// A tracked fungible token or the chain's native currency.
///
/// Defined by static configuration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub decimals: u32,
    /// Token contract; `None` for the native asset.
    pub contract: Option<String>,
}

impl Asset {
    pub fn native(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            contract: None,
        }
    }

    pub fn token(symbol: impl Into<String>, decimals: u32, contract: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            contract: Some(contract.into()),
        }
    }

    pub fn is_native(&self) -> bool {
        self.contract.is_none()
    }
}

/// EVM network whose token contracts are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainNetwork {
    Mainnet,
    #[default]
    Sepolia,
}

impl ChainNetwork {
    pub fn chain_id(&self) -> u64 {
        match self {
            ChainNetwork::Mainnet => MAINNET_CHAIN_ID,
            ChainNetwork::Sepolia => SEPOLIA_CHAIN_ID,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainNetwork::Mainnet => "mainnet",
            ChainNetwork::Sepolia => "sepolia",
        }
    }
}

impl fmt::Display for ChainNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "ethereum" | "1" => Ok(ChainNetwork::Mainnet),
            "sepolia" | "11155111" => Ok(ChainNetwork::Sepolia),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown network '{}' (expected mainnet or sepolia)",
                other
            ))),
        }
    }
}

/// Ordered list of tracked assets: the native asset first, then tokens.
///
/// The order is the display order used by the prompt and the join order used
/// by the balance aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRegistry {
    network: ChainNetwork,
    assets: Vec<Asset>,
}

impl AssetRegistry {
    /// Build a registry, checking the structural invariants.
    pub fn new(network: ChainNetwork, native: Asset, tokens: Vec<Asset>) -> Result<Self> {
        if !native.is_native() {
            return Err(ValidationError::InvalidInput(format!(
                "native asset {} must not have a contract address",
                native.symbol
            ))
            .into());
        }

        let mut seen = BTreeSet::new();
        let assets: Vec<Asset> = std::iter::once(native).chain(tokens).collect();
        for (index, asset) in assets.iter().enumerate() {
            if asset.symbol.trim().is_empty() {
                return Err(ValidationError::MissingField("symbol".to_string()).into());
            }
            if index > 0 && asset.is_native() {
                return Err(ValidationError::InvalidInput(format!(
                    "token {} is missing a contract address",
                    asset.symbol
                ))
                .into());
            }
            if asset.decimals > MAX_ASSET_DECIMALS {
                return Err(ValidationError::InvalidInput(format!(
                    "{} declares {} decimals (max {})",
                    asset.symbol, asset.decimals, MAX_ASSET_DECIMALS
                ))
                .into());
            }
            if !seen.insert(asset.symbol.clone()) {
                return Err(ValidationError::InvalidInput(format!(
                    "duplicate asset symbol {}",
                    asset.symbol
                ))
                .into());
            }
        }

        Ok(Self { network, assets })
    }

    /// The statically configured registry for a network: ETH, USDC, LINK.
    pub fn for_network(network: ChainNetwork) -> Self {
        let (usdc, link) = match network {
            ChainNetwork::Mainnet => (MAINNET_USDC_CONTRACT, MAINNET_LINK_CONTRACT),
            ChainNetwork::Sepolia => (SEPOLIA_USDC_CONTRACT, SEPOLIA_LINK_CONTRACT),
        };
        Self {
            network,
            assets: vec![
                Asset::native(NATIVE_SYMBOL, NATIVE_DECIMALS),
                Asset::token(USDC_SYMBOL, USDC_DECIMALS, usdc),
                Asset::token(LINK_SYMBOL, LINK_DECIMALS, link),
            ],
        }
    }

    pub fn network(&self) -> ChainNetwork {
        self.network
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn native(&self) -> &Asset {
        &self.assets[0]
    }

    pub fn tokens(&self) -> &[Asset] {
        &self.assets[1..]
    }

    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    /// Symbols in registry order.
    pub fn symbols(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.symbol.as_str()).collect()
    }

    /// Symbol set handed to the price source.
    pub fn symbol_set(&self) -> BTreeSet<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }
}
