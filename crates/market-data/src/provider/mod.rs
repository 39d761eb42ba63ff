//! Market data provider abstractions and implementations.
//!
//! Providers map wallet tickers to their own identifiers and return the
//! latest spot prices for the symbols they know.

mod traits;

pub mod coingecko;

pub use traits::MarketDataProvider;
