/// Provider identifier (e.g., "COINGECKO")
pub type ProviderId = &'static str;

/// Quote currency code, lowercase as CoinGecko expects it (e.g., "usd")
pub type Currency = String;
