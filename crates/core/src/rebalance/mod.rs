//! Rebalance module - the end-to-end strategy pipeline.

mod rebalance_model;
mod rebalance_service;
mod rebalance_traits;

#[cfg(test)]
mod rebalance_service_tests;

pub use rebalance_model::{FailureResponse, RebalanceRequest, RebalanceResponse, RebalanceResult};
pub use rebalance_service::RebalanceService;
pub use rebalance_traits::RebalanceServiceTrait;
