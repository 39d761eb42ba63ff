//! CoinGecko provider for crypto spot prices.
//!
//! - Public API: no key, tight rate limits
//! - Demo API: free key prefixed `CG-`, sent as `x-cg-demo-api-key`
//! - Pro API: paid key on `pro-api.coingecko.com`, sent as `x-cg-pro-api-key`
//!
//! Only the `/simple/price` endpoint is used.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::SpotPrice;
use crate::provider::MarketDataProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public and demo API base URL
const PUBLIC_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Pro API base URL
const PRO_BASE_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Demo keys carry this prefix
const DEMO_KEY_PREFIX: &str = "CG-";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Ticker to CoinGecko coin id
const COIN_IDS: &[(&str, &str)] = &[
    ("ETH", "ethereum"),
    ("USDC", "usd-coin"),
    ("LINK", "chainlink"),
    ("WETH", "weth"),
];

/// `/simple/price` body: coin id -> currency -> price
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// Map a wallet ticker to its CoinGecko coin id.
pub fn coin_id_for(symbol: &str) -> Option<&'static str> {
    COIN_IDS
        .iter()
        .find(|(ticker, _)| ticker.eq_ignore_ascii_case(symbol))
        .map(|(_, id)| *id)
}

/// Which API tier an optional key selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiTier {
    Public,
    Demo,
    Pro,
}

impl ApiTier {
    fn for_key(api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) if key.starts_with(DEMO_KEY_PREFIX) => ApiTier::Demo,
            Some(_) => ApiTier::Pro,
            None => ApiTier::Public,
        }
    }

    fn base_url(self) -> &'static str {
        match self {
            ApiTier::Public | ApiTier::Demo => PUBLIC_BASE_URL,
            ApiTier::Pro => PRO_BASE_URL,
        }
    }

    fn key_header(self) -> Option<&'static str> {
        match self {
            ApiTier::Public => None,
            ApiTier::Demo => Some("x-cg-demo-api-key"),
            ApiTier::Pro => Some("x-cg-pro-api-key"),
        }
    }
}

/// CoinGecko spot price provider.
///
/// # Example
///
/// ```ignore
/// use walli_market_data::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new(Some("CG-xxxx".to_string()));
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider; blank keys are treated as absent.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        let base_url = ApiTier::for_key(api_key.as_deref()).base_url().to_string();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Point the provider at a different API root (proxies, local mocks).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn tier(&self) -> ApiTier {
        ApiTier::for_key(self.api_key.as_deref())
    }
}

/// Turn a `/simple/price` body into spot prices for the requested tickers.
///
/// Tickers whose coin id or currency entry is missing are skipped.
fn parse_simple_price(
    body: &str,
    requested: &[(&str, &'static str)],
    currency: &str,
) -> Result<Vec<SpotPrice>, MarketDataError> {
    let data: SimplePriceResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::ValidationFailed {
            message: format!("unexpected CoinGecko body: {}", e),
        })?;

    let mut prices = Vec::with_capacity(requested.len());
    for (symbol, coin_id) in requested {
        let Some(value) = data.get(*coin_id).and_then(|c| c.get(currency)) else {
            debug!("CoinGecko returned no {} price for {}", currency, symbol);
            continue;
        };
        let price = Decimal::try_from(*value).map_err(|_| MarketDataError::ValidationFailed {
            message: format!("price for {} is not a finite number", symbol),
        })?;
        prices.push(SpotPrice::new(*symbol, price, currency, PROVIDER_ID));
    }
    Ok(prices)
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_prices(
        &self,
        symbols: &[String],
        currency: &str,
    ) -> Result<Vec<SpotPrice>, MarketDataError> {
        let requested: Vec<(&str, &'static str)> = symbols
            .iter()
            .filter_map(|s| coin_id_for(s).map(|id| (s.as_str(), id)))
            .collect();

        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let currency = currency.to_lowercase();
        let ids = requested
            .iter()
            .map(|(_, id)| *id)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/simple/price", self.base_url);

        let mut request = self
            .client
            .get(&url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", currency.as_str())])
            .header("Accept", "application/json");

        let tier = self.tier();
        if let (Some(header), Some(key)) = (tier.key_header(), self.api_key.as_deref()) {
            request = request.header(header, key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let body = response.text().await?;
        parse_simple_price(&body, &requested, &currency)
    }
}
