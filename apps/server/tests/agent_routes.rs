use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;
use walli_core::{
    advice::AdviceService,
    assets::{SEPOLIA_LINK_CONTRACT, SEPOLIA_USDC_CONTRACT},
    balances::{BalanceAggregator, StaticBalanceSource},
    completion::{CompletionSourceTrait, FakeCompletionSource},
    errors::CompletionError,
    pricing::{FixedPriceSource, PriceSet},
    rebalance::RebalanceService,
    AssetRegistry, ChainNetwork,
};
use walli_server::{api::app_router, config::Config, AppState};

const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

const REPLY: &str = "Conservative:\nETH: 20%\nUSDC: 70%\nLINK: 10%\nLow volatility.\n\nBalanced:\nETH: 40%\nUSDC: 40%\nLINK: 20%\nModerate risk.";

fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::from_lookup(|name: &str| {
        if let Some((_, value)) = overrides.iter().find(|(key, _)| *key == name) {
            return Some(value.to_string());
        }
        match name {
            "ETHERSCAN_API_KEY" | "GROQ_API_KEY" => Some("test-key".to_string()),
            _ => None,
        }
    })
    .unwrap()
}

/// Completion source that answers only after `delay`.
struct SlowCompletionSource {
    delay: Duration,
}

#[async_trait]
impl CompletionSourceTrait for SlowCompletionSource {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        tokio::time::sleep(self.delay).await;
        Ok(REPLY.to_string())
    }
}

fn reference_balances() -> StaticBalanceSource {
    StaticBalanceSource::new(dec!(1.5))
        .with_token(SEPOLIA_USDC_CONTRACT, dec!(200.0))
        .with_token(SEPOLIA_LINK_CONTRACT, dec!(0.0))
}

fn build_test_router(balances: StaticBalanceSource, completion: FakeCompletionSource) -> Router {
    build_router_with(balances, Arc::new(completion), &test_config(&[]))
}

fn build_router_with(
    balances: StaticBalanceSource,
    completion: Arc<dyn CompletionSourceTrait>,
    config: &Config,
) -> Router {
    let prices: PriceSet = [
        ("ETH".to_string(), dec!(2000)),
        ("USDC".to_string(), dec!(1)),
    ]
    .into_iter()
    .collect();

    let aggregator = BalanceAggregator::new(
        AssetRegistry::for_network(ChainNetwork::Sepolia),
        Arc::new(balances),
    );
    let state = Arc::new(AppState {
        rebalance_service: Arc::new(RebalanceService::new(
            aggregator.clone(),
            Arc::new(FixedPriceSource::new(prices)),
            completion.clone(),
        )),
        advice_service: Arc::new(AdviceService::new(aggregator, completion)),
    });
    app_router(state, config)
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_and_readyz_respond_ok() {
    let app = build_test_router(reference_balances(), FakeCompletionSource::replying(REPLY));

    for uri in ["/api/v1/healthz", "/api/v1/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn rebalance_returns_strategies_and_valuation() {
    let app = build_test_router(reference_balances(), FakeCompletionSource::replying(REPLY));
    let body = json!({ "wallet_address": ADDRESS, "prompt": "Keep it safe" }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/rebalance", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert!(json.get("error").is_none());
    assert_eq!(json["usd_value"]["ETH"], json!(3000.0));
    assert_eq!(json["usd_value"]["USDC"], json!(200.0));
    assert_eq!(json["usd_value"]["LINK"], json!(0.0));
    assert_eq!(json["total_usd_value"], json!(3200.0));
    assert_eq!(json["raw_agent_response"], json!(REPLY));

    let strategies = json["strategies"].as_array().unwrap();
    assert_eq!(strategies.len(), 2);
    assert_eq!(strategies[0]["label"], json!("Conservative"));
    assert_eq!(strategies[0]["target_allocation"]["USDC"], json!(70));
    assert_eq!(strategies[1]["label"], json!("Balanced"));
}

#[tokio::test]
async fn rebalance_with_invalid_address_is_bad_request() {
    let app = build_test_router(reference_balances(), FakeCompletionSource::replying(REPLY));
    let body = json!({ "wallet_address": "0x1234" }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/rebalance", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["error"].as_str().unwrap().contains("0x1234"));
}

#[tokio::test]
async fn rebalance_with_failing_balance_is_bad_gateway() {
    let balances = StaticBalanceSource::new(dec!(1.5))
        .with_failing_token(SEPOLIA_USDC_CONTRACT)
        .with_token(SEPOLIA_LINK_CONTRACT, dec!(0.0));
    let app = build_test_router(balances, FakeCompletionSource::replying(REPLY));
    let body = json!({ "wallet_address": ADDRESS }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/rebalance", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = read_json(response).await;
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["error"].as_str().unwrap().contains("USDC"));
}

#[tokio::test]
async fn rebalance_with_malformed_body_reports_error() {
    let app = build_test_router(reference_balances(), FakeCompletionSource::replying(REPLY));

    let response = app
        .oneshot(post_json("/api/v1/agent/rebalance", "{not json".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn rebalance_with_empty_completion_succeeds_without_strategies() {
    let app = build_test_router(reference_balances(), FakeCompletionSource::replying(""));
    let body = json!({ "wallet_address": ADDRESS }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/rebalance", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["strategies"], json!([]));
    assert_eq!(json["raw_agent_response"], json!(""));
}

#[tokio::test]
async fn ask_returns_model_response() {
    let app = build_test_router(
        reference_balances(),
        FakeCompletionSource::replying("Stake your ETH."),
    );
    let body = json!({ "wallet_address": ADDRESS, "prompt": "Any yield ideas?" }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/ask", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json, json!({ "response": "Stake your ETH." }));
}

#[tokio::test]
async fn ask_with_failing_completion_is_bad_gateway() {
    let completion =
        FakeCompletionSource::failing(CompletionError::Provider("quota exceeded".to_string()));
    let app = build_test_router(reference_balances(), completion);
    let body = json!({ "wallet_address": ADDRESS, "prompt": "Any yield ideas?" }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/ask", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = read_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn slow_completion_times_out_with_error_body() {
    let config = test_config(&[("WALLI_REQUEST_TIMEOUT_MS", "20")]);
    let completion = Arc::new(SlowCompletionSource {
        delay: Duration::from_millis(500),
    });
    let app = build_router_with(reference_balances(), completion, &config);
    let body = json!({ "wallet_address": ADDRESS }).to_string();

    let response = app
        .oneshot(post_json("/api/v1/agent/rebalance", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    let json = read_json(response).await;
    assert_eq!(json, json!({ "error": "Request timed out after 20 ms" }));
}
