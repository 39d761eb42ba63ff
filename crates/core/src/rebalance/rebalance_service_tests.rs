//! Unit tests for the rebalance pipeline.

use super::*;
use crate::assets::{AssetRegistry, ChainNetwork, SEPOLIA_LINK_CONTRACT, SEPOLIA_USDC_CONTRACT};
use crate::balances::{BalanceAggregator, StaticBalanceSource};
use crate::completion::FakeCompletionSource;
use crate::errors::{CompletionError, FailureKind, PriceFetchError};
use crate::pricing::{FixedPriceSource, PriceSet};
use rust_decimal_macros::dec;
use std::sync::Arc;

const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

const REPLY: &str = "Conservative:\nETH: 20%\nUSDC: 70%\nLINK: 10%\nLow volatility.\n\nBalanced:\nETH: 40%\nUSDC: 40%\nLINK: 20%\nModerate risk.";

// ============================================================================
// Fixtures
// ============================================================================

struct Harness {
    service: RebalanceService,
    balances: Arc<StaticBalanceSource>,
    completion: Arc<FakeCompletionSource>,
}

fn reference_balances() -> StaticBalanceSource {
    StaticBalanceSource::new(dec!(1.5))
        .with_token(SEPOLIA_USDC_CONTRACT, dec!(200.0))
        .with_token(SEPOLIA_LINK_CONTRACT, dec!(0.0))
}

fn reference_prices() -> FixedPriceSource {
    let prices: PriceSet = [
        ("ETH".to_string(), dec!(2000)),
        ("USDC".to_string(), dec!(1)),
    ]
    .into_iter()
    .collect();
    FixedPriceSource::new(prices)
}

fn harness(
    balances: StaticBalanceSource,
    prices: FixedPriceSource,
    completion: FakeCompletionSource,
) -> Harness {
    let balances = Arc::new(balances);
    let completion = Arc::new(completion);
    let aggregator = BalanceAggregator::new(
        AssetRegistry::for_network(ChainNetwork::Sepolia),
        balances.clone(),
    );
    let service = RebalanceService::new(aggregator, Arc::new(prices), completion.clone());
    Harness {
        service,
        balances,
        completion,
    }
}

fn request(prompt: &str) -> RebalanceRequest {
    RebalanceRequest {
        wallet_address: ADDRESS.to_string(),
        prompt: prompt.to_string(),
    }
}

fn expect_failure(response: RebalanceResponse) -> FailureResponse {
    match response {
        RebalanceResponse::Failure(failure) => failure,
        RebalanceResponse::Success(result) => panic!("expected failure, got {:?}", result),
    }
}

fn expect_success(response: RebalanceResponse) -> RebalanceResult {
    match response {
        RebalanceResponse::Success(result) => *result,
        RebalanceResponse::Failure(failure) => panic!("expected success, got {:?}", failure),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_full_pipeline() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::replying(REPLY),
    );

    let result = expect_success(h.service.rebalance(request("Lower my risk")).await);

    assert_eq!(result.balances.get("ETH"), Some(dec!(1.5)));
    assert_eq!(result.valuation.value_of("ETH"), dec!(3000.00));
    assert_eq!(result.valuation.value_of("USDC"), dec!(200.00));
    assert_eq!(result.valuation.value_of("LINK"), dec!(0.00));
    assert_eq!(result.valuation.total, dec!(3200.00));
    assert_eq!(result.strategies.len(), 2);
    assert_eq!(result.strategies[0].label, "Conservative");
    assert_eq!(result.strategies[1].label, "Balanced");
    assert_eq!(result.raw_agent_response, REPLY);
    assert_eq!(result.prices.get("ETH"), Some(dec!(2000)));
}

#[tokio::test]
async fn test_prompt_reaches_completion_source() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::replying(REPLY),
    );

    h.service.rebalance(request("Lower my risk")).await;

    let prompt = h.completion.last_prompt().unwrap();
    assert!(prompt.contains("- ETH: 1.5000 ($3,000.00)"));
    assert!(prompt.contains("Total Portfolio USD: ~$3,200.00"));
    assert!(prompt.ends_with("User request: Lower my risk"));
}

#[tokio::test]
async fn test_success_serializes_expected_fields() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::replying(REPLY),
    );

    let response = h.service.rebalance(request("x")).await;
    let json = serde_json::to_value(&response).unwrap();

    for key in [
        "balances",
        "usd_value",
        "total_usd_value",
        "prices",
        "strategies",
        "raw_agent_response",
        "generated_at",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert!(json.get("error").is_none());
    assert_eq!(json["strategies"][0]["target_allocation"]["USDC"], 70);
    assert_eq!(json["strategies"][0]["rationale"], "Low volatility.");
}

#[tokio::test]
async fn test_failing_balance_fetch_yields_error_only() {
    let h = harness(
        StaticBalanceSource::new(dec!(1))
            .with_token(SEPOLIA_USDC_CONTRACT, dec!(5))
            .with_failing_token(SEPOLIA_LINK_CONTRACT),
        reference_prices(),
        FakeCompletionSource::replying(REPLY),
    );

    let response = h.service.rebalance(request("x")).await;
    let json = serde_json::to_value(&response).unwrap();
    let failure = expect_failure(response);

    assert_eq!(failure.kind, FailureKind::Upstream);
    assert!(failure.error.contains("LINK"));
    assert_eq!(json.as_object().unwrap().len(), 1);
    assert!(json.get("error").is_some());
    assert_eq!(h.completion.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_address_makes_no_calls() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::replying(REPLY),
    );

    let response = h
        .service
        .rebalance(RebalanceRequest {
            wallet_address: "not-an-address".to_string(),
            prompt: "x".to_string(),
        })
        .await;
    let failure = expect_failure(response);

    assert_eq!(failure.kind, FailureKind::InvalidInput);
    assert!(failure.error.contains("not-an-address"));
    assert_eq!(h.balances.call_count(), 0);
    assert_eq!(h.completion.call_count(), 0);
}

#[tokio::test]
async fn test_empty_completion_is_success_without_strategies() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::replying(""),
    );

    let result = expect_success(h.service.rebalance(request("x")).await);
    assert!(result.strategies.is_empty());
    assert_eq!(result.raw_agent_response, "");
}

#[tokio::test]
async fn test_unstructured_completion_is_success_without_strategies() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::replying("I cannot help with that right now."),
    );

    let result = expect_success(h.service.rebalance(request("x")).await);
    assert!(result.strategies.is_empty());
}

#[tokio::test]
async fn test_completion_error_is_failure() {
    let h = harness(
        reference_balances(),
        reference_prices(),
        FakeCompletionSource::failing(CompletionError::provider("503 overloaded")),
    );

    let failure = expect_failure(h.service.rebalance(request("x")).await);
    assert_eq!(failure.kind, FailureKind::Upstream);
    assert_eq!(failure.error, "Completion provider error: 503 overloaded");
}

#[tokio::test]
async fn test_unreachable_price_source_is_failure() {
    let h = harness(
        reference_balances(),
        FixedPriceSource::failing(PriceFetchError {
            provider: "COINGECKO".to_string(),
            message: "timed out".to_string(),
        }),
        FakeCompletionSource::replying(REPLY),
    );

    let failure = expect_failure(h.service.rebalance(request("x")).await);
    assert!(failure.error.contains("COINGECKO"));
    assert_eq!(h.completion.call_count(), 0);
}

#[tokio::test]
async fn test_missing_prices_value_assets_at_zero() {
    let h = harness(
        reference_balances(),
        FixedPriceSource::new(PriceSet::empty()),
        FakeCompletionSource::replying(REPLY),
    );

    let result = expect_success(h.service.rebalance(request("x")).await);
    assert_eq!(result.valuation.total, dec!(0));
    assert!(h.completion.last_prompt().unwrap().contains("~$0.00"));
}
