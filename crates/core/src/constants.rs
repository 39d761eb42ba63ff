/// Decimal places for USD values (per-asset and total).
pub const USD_DECIMAL_PLACES: u32 = 2;

/// Decimal places used when displaying the native asset quantity.
pub const NATIVE_QUANTITY_DISPLAY_PLACES: u32 = 4;

/// Decimal places used when displaying token quantities.
pub const TOKEN_QUANTITY_DISPLAY_PLACES: u32 = 2;

/// Quote currency requested from the price source.
pub const PRICE_QUOTE_CURRENCY: &str = "usd";

/// Highest decimal precision a tracked asset may declare.
/// Bounded by the 28-digit scale of `rust_decimal::Decimal`.
pub const MAX_ASSET_DECIMALS: u32 = 28;
