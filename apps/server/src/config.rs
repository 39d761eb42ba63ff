use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use walli_ai::LlmConfig;
use walli_chain::DEFAULT_ETHERSCAN_API_URL;
use walli_core::ChainNetwork;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub network: ChainNetwork,
    pub etherscan_api_key: String,
    pub etherscan_base_url: String,
    pub coingecko_api_key: Option<String>,
    pub llm: LlmConfig,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let listen_addr: SocketAddr = get("WALLI_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid WALLI_LISTEN_ADDR")?;
        let cors_allow = get("WALLI_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match get("WALLI_REQUEST_TIMEOUT_MS") {
            Some(value) => value.parse().context("Invalid WALLI_REQUEST_TIMEOUT_MS")?,
            None => DEFAULT_TIMEOUT_MS,
        };
        let network = match get("WALLI_NETWORK") {
            Some(value) => value.parse().context("Invalid WALLI_NETWORK")?,
            None => ChainNetwork::default(),
        };
        let etherscan_api_key =
            get("ETHERSCAN_API_KEY").ok_or_else(|| anyhow!("ETHERSCAN_API_KEY is not set"))?;
        let etherscan_base_url =
            get("ETHERSCAN_BASE_URL").unwrap_or_else(|| DEFAULT_ETHERSCAN_API_URL.to_string());
        let llm = LlmConfig::from_lookup(&lookup).context("Invalid language model settings")?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            network,
            etherscan_api_key,
            etherscan_base_url,
            coingecko_api_key: get("COINGECKO_API_KEY"),
            llm,
        })
    }
}
