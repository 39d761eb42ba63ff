use async_trait::async_trait;

use super::rebalance_model::{RebalanceRequest, RebalanceResponse};

/// Trait for the rebalance pipeline.
///
/// Infallible at the type level: every failure is already folded into
/// [`RebalanceResponse::Failure`].
#[async_trait]
pub trait RebalanceServiceTrait: Send + Sync {
    async fn rebalance(&self, request: RebalanceRequest) -> RebalanceResponse;
}
