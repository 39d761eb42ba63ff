//! Balances module - per-asset wallet quantities and their aggregation.

mod balances_model;
mod balances_service;
mod balances_traits;


pub use balances_model::BalanceSet;
pub use balances_service::BalanceAggregator;
pub use balances_traits::{BalanceSourceTrait, StaticBalanceSource};
