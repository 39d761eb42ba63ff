use std::sync::Arc;

use crate::{
    error::{failure_response, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use walli_core::{
    advice::{AdviceRequest, AdviceResponse, AdviceServiceTrait},
    rebalance::{RebalanceRequest, RebalanceResponse, RebalanceServiceTrait},
};

/// Generate allocation strategies for a wallet.
async fn rebalance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RebalanceRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    let response = match state.rebalance_service.rebalance(request).await {
        RebalanceResponse::Success(result) => Json(result).into_response(),
        RebalanceResponse::Failure(failure) => failure_response(failure),
    };
    Ok(response)
}

/// Answer a free-form question about a wallet.
async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    let response = match state.advice_service.ask(request).await {
        AdviceResponse::Success(result) => Json(result).into_response(),
        AdviceResponse::Failure(failure) => failure_response(failure),
    };
    Ok(response)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/agent/rebalance", post(rebalance))
        .route("/agent/ask", post(ask))
}
