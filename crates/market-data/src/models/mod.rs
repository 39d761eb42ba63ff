//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, Currency)
//! - `spot_price` - Latest unit price of a symbol (SpotPrice)

mod spot_price;
mod types;

pub use spot_price::SpotPrice;
pub use types::{Currency, ProviderId};
