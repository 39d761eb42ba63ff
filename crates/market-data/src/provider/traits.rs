//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::SpotPrice;

/// Trait for spot price providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use walli_market_data::{MarketDataError, MarketDataProvider, SpotPrice};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_latest_prices(
///         &self,
///         symbols: &[String],
///         currency: &str,
///     ) -> Result<Vec<SpotPrice>, MarketDataError> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, like "COINGECKO".
    ///
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest prices of `symbols` quoted in `currency`.
    ///
    /// Symbols the provider does not know are omitted from the result rather
    /// than reported as errors. An empty `symbols` slice yields an empty
    /// result without any request.
    async fn get_latest_prices(
        &self,
        symbols: &[String],
        currency: &str,
    ) -> Result<Vec<SpotPrice>, MarketDataError>;
}
