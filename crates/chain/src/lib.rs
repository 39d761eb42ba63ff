//! Walli Chain - on-chain balance lookups.
//!
//! Implements [`walli_core::balances::BalanceSourceTrait`] on top of the
//! Etherscan v2 multichain API. Raw integer amounts are scaled into
//! human units with exact decimal arithmetic.

pub mod etherscan;
pub mod units;

pub use etherscan::{EtherscanClient, DEFAULT_ETHERSCAN_API_URL};
pub use units::scale_raw_amount;
