//! Assets module - tracked assets, network registries and wallet addresses.

mod assets_constants;
mod assets_model;
mod wallet_address;

#[cfg(test)]
mod assets_model_tests;

// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::{Asset, AssetRegistry, ChainNetwork};
pub use wallet_address::WalletAddress;
