//! Tests for asset domain models.

use crate::assets::*;
use crate::errors::{Error, ValidationError};

const VALID_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

#[test]
fn test_sepolia_registry_order_and_contracts() {
    let registry = AssetRegistry::for_network(ChainNetwork::Sepolia);
    assert_eq!(registry.symbols(), vec!["ETH", "USDC", "LINK"]);
    assert!(registry.native().is_native());
    assert_eq!(registry.native().decimals, 18);

    let usdc = registry.get("USDC").unwrap();
    assert_eq!(usdc.decimals, 6);
    assert_eq!(usdc.contract.as_deref(), Some(SEPOLIA_USDC_CONTRACT));
    assert_eq!(registry.tokens().len(), 2);
}

#[test]
fn test_mainnet_registry_uses_mainnet_contracts() {
    let registry = AssetRegistry::for_network(ChainNetwork::Mainnet);
    assert_eq!(registry.network().chain_id(), 1);
    assert_eq!(
        registry.get("LINK").unwrap().contract.as_deref(),
        Some(MAINNET_LINK_CONTRACT)
    );
}

#[test]
fn test_registry_rejects_duplicate_symbols() {
    let result = AssetRegistry::new(
        ChainNetwork::Mainnet,
        Asset::native("ETH", 18),
        vec![
            Asset::token("USDC", 6, "0x01"),
            Asset::token("USDC", 6, "0x02"),
        ],
    );
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidInput(_)))
    ));
}

#[test]
fn test_registry_rejects_token_without_contract() {
    let result = AssetRegistry::new(
        ChainNetwork::Mainnet,
        Asset::native("ETH", 18),
        vec![Asset::native("WETH", 18)],
    );
    assert!(result.is_err());
}

#[test]
fn test_registry_rejects_excessive_decimals() {
    let result = AssetRegistry::new(
        ChainNetwork::Mainnet,
        Asset::native("ETH", 18),
        vec![Asset::token("BIG", 30, "0x03")],
    );
    assert!(result.is_err());
}

#[test]
fn test_chain_network_parsing() {
    assert_eq!("Mainnet".parse::<ChainNetwork>().unwrap(), ChainNetwork::Mainnet);
    assert_eq!(" sepolia ".parse::<ChainNetwork>().unwrap(), ChainNetwork::Sepolia);
    assert_eq!("11155111".parse::<ChainNetwork>().unwrap(), ChainNetwork::Sepolia);
    assert!("goerli".parse::<ChainNetwork>().is_err());
    assert_eq!(ChainNetwork::default(), ChainNetwork::Sepolia);
}

#[test]
fn test_wallet_address_accepts_checksummed_and_lowercase() {
    let address = WalletAddress::parse(VALID_ADDRESS).unwrap();
    assert_eq!(address.as_str(), VALID_ADDRESS);

    let lower = VALID_ADDRESS.to_lowercase();
    assert!(WalletAddress::parse(&lower).is_ok());
    assert!(WalletAddress::parse(&format!("  {}  ", VALID_ADDRESS)).is_ok());
}

#[test]
fn test_wallet_address_rejects_bad_shapes() {
    for input in [
        "",
        "742d35Cc6634C0532925a3b844Bc454e4438f44e",
        "0x742d35Cc6634C0532925a3b844Bc454e4438f44",
        "0x742d35Cc6634C0532925a3b844Bc454e4438f44e00",
        "0x742d35Cc6634C0532925a3b844Bc454e4438f44g",
    ] {
        assert!(
            matches!(
                WalletAddress::parse(input),
                Err(ValidationError::InvalidWalletAddress(_))
            ),
            "expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn test_wallet_address_short_form() {
    let address = WalletAddress::parse(VALID_ADDRESS).unwrap();
    assert_eq!(address.short(), "0x742d…f44e");
}

#[test]
fn test_wallet_address_serde_validates() {
    let json = format!("\"{}\"", VALID_ADDRESS);
    let address: WalletAddress = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&address).unwrap(), json);
    assert!(serde_json::from_str::<WalletAddress>("\"0x1\"").is_err());
}
