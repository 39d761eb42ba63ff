//! Walli Core - Rebalance strategy pipeline.
//!
//! This crate turns a wallet's on-chain holdings into language-model generated
//! allocation strategies. It owns the data model and the pipeline stages, and
//! defines the collaborator traits (balance source, price source, completion
//! source) that the `chain`, `market-data` and `ai` crates implement.
//!
//! Pipeline, leaves first:
//!
//! ```text
//! BalanceAggregator ─┐
//!                    ├─> calculate_valuation ─> build_rebalance_prompt
//! PriceSource ───────┘                                   │
//!                                                        v
//!                 RebalanceResult <── StrategyExtractor <── CompletionSource
//! ```

pub mod advice;
pub mod assets;
pub mod balances;
pub mod completion;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod pricing;
pub mod rebalance;
pub mod strategies;
pub mod utils;

// Re-export the types most callers need
pub use assets::{Asset, AssetRegistry, ChainNetwork, WalletAddress};
pub use balances::BalanceSet;
pub use portfolio::valuation::Valuation;
pub use pricing::PriceSet;
pub use strategies::StrategyRecord;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
