//! Pricing module - USD unit prices for tracked assets.

mod market_data_price_source;
mod pricing_model;
mod pricing_traits;

pub use market_data_price_source::MarketDataPriceSource;
pub use pricing_model::PriceSet;
pub use pricing_traits::{FixedPriceSource, PriceSourceTrait};
