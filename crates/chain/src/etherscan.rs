//! Etherscan v2 balance source.
//!
//! One endpoint serves every supported network; the network is selected with
//! the `chainid` query parameter.

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use walli_core::assets::{ChainNetwork, WalletAddress, NATIVE_DECIMALS};
use walli_core::balances::BalanceSourceTrait;
use walli_core::errors::{BalanceSourceError, Error, Result};

use crate::units::scale_raw_amount;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default base URL of the Etherscan v2 multichain API.
pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";

/// Etherscan marks successful calls with status "1".
const STATUS_OK: &str = "1";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

impl ApiResponse {
    fn result_text(&self) -> String {
        match &self.result {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Parse an Etherscan body into a scaled quantity.
fn parse_balance_body(
    body: &str,
    decimals: u32,
) -> std::result::Result<Decimal, BalanceSourceError> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        BalanceSourceError::InvalidResponse(format!(
            "{} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })?;

    if response.status != STATUS_OK {
        return Err(BalanceSourceError::Provider(format!(
            "{}: {}",
            response.message,
            response.result_text()
        )));
    }

    match &response.result {
        serde_json::Value::String(raw) => scale_raw_amount(raw, decimals),
        other => Err(BalanceSourceError::InvalidResponse(format!(
            "expected an integer string, got {}",
            other
        ))),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Balance source backed by the Etherscan API.
#[derive(Clone)]
pub struct EtherscanClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    network: ChainNetwork,
}

impl EtherscanClient {
    pub fn new(base_url: &str, api_key: &str, network: ChainNetwork) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "Etherscan API key must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                Error::InvalidConfigValue(format!("Failed to initialize HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            network,
        })
    }

    pub fn network(&self) -> ChainNetwork {
        self.network
    }

    fn native_query(&self, address: &WalletAddress) -> Vec<(&'static str, String)> {
        vec![
            ("chainid", self.network.chain_id().to_string()),
            ("module", "account".to_string()),
            ("action", "balance".to_string()),
            ("address", address.to_string()),
            ("tag", "latest".to_string()),
            ("apikey", self.api_key.clone()),
        ]
    }

    fn token_query(
        &self,
        address: &WalletAddress,
        contract: &str,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("chainid", self.network.chain_id().to_string()),
            ("module", "account".to_string()),
            ("action", "tokenbalance".to_string()),
            ("contractaddress", contract.to_string()),
            ("address", address.to_string()),
            ("tag", "latest".to_string()),
            ("apikey", self.api_key.clone()),
        ]
    }

    async fn get_balance(
        &self,
        query: &[(&'static str, String)],
        decimals: u32,
    ) -> std::result::Result<Decimal, BalanceSourceError> {
        debug!(
            "[Etherscan] GET {} action={}",
            self.base_url,
            query
                .iter()
                .find(|(k, _)| *k == "action")
                .map(|(_, v)| v.as_str())
                .unwrap_or_default()
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| BalanceSourceError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BalanceSourceError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(BalanceSourceError::Provider(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        parse_balance_body(&body, decimals)
    }
}

#[async_trait]
impl BalanceSourceTrait for EtherscanClient {
    async fn fetch_native_balance(
        &self,
        address: &WalletAddress,
    ) -> std::result::Result<Decimal, BalanceSourceError> {
        self.get_balance(&self.native_query(address), NATIVE_DECIMALS)
            .await
    }

    async fn fetch_token_balance(
        &self,
        address: &WalletAddress,
        contract: &str,
        decimals: u32,
    ) -> std::result::Result<Decimal, BalanceSourceError> {
        self.get_balance(&self.token_query(address, contract), decimals)
            .await
    }
}
