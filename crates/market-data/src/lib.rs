//! Walli Market Data Crate
//!
//! Provider-agnostic spot price fetching for the crypto assets a wallet holds.
//!
//! # Overview
//!
//! - [`MarketDataProvider`] - the trait every price provider implements
//! - [`CoinGeckoProvider`] - CoinGecko `/simple/price` implementation
//! - [`SpotPrice`] - a single latest unit price in a quote currency
//! - [`MarketDataError`] / [`FailureClass`] - errors and how callers should
//!   treat them (transport failure versus an unusable answer)
//!
//! Symbols are the wallet-facing tickers (`ETH`, `USDC`, ...). Each provider
//! maps them to its own identifiers and silently omits symbols it does not
//! know.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{FailureClass, MarketDataError};
pub use models::{Currency, ProviderId, SpotPrice};
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::MarketDataProvider;
