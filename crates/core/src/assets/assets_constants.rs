/// Symbol of the chain's native asset.
pub const NATIVE_SYMBOL: &str = "ETH";

/// Decimal precision of the native asset (wei).
pub const NATIVE_DECIMALS: u32 = 18;

/// USD Coin symbol.
pub const USDC_SYMBOL: &str = "USDC";

/// USD Coin decimal precision.
pub const USDC_DECIMALS: u32 = 6;

/// Chainlink symbol.
pub const LINK_SYMBOL: &str = "LINK";

/// Chainlink decimal precision.
pub const LINK_DECIMALS: u32 = 18;

/// Ethereum mainnet chain id.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Sepolia testnet chain id.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Mainnet token contracts.
pub const MAINNET_USDC_CONTRACT: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const MAINNET_LINK_CONTRACT: &str = "0x514910771af9ca656af840dff83e8264ecf986ca";

/// Sepolia token contracts.
pub const SEPOLIA_USDC_CONTRACT: &str = "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238";
pub const SEPOLIA_LINK_CONTRACT: &str = "0x779877A7B0D9E8603169DdbD7836e478b4624789";
