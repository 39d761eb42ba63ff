use std::time::Duration;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde::Serialize;
use thiserror::Error;
use walli_core::errors::FailureKind;
use walli_core::rebalance::FailureResponse;

/// Errors raised by the HTTP layer itself, before a request reaches a service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("Request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map an error raised by a middleware layer (timeout, overload).
    pub fn from_middleware(err: BoxError, timeout: Duration) -> Self {
        if err.is::<tower::timeout::error::Elapsed>() {
            ApiError::Timeout(timeout)
        } else {
            ApiError::Internal(format!("Unhandled middleware error: {}", err))
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP status for a pipeline failure.
pub fn failure_status(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::InvalidInput => StatusCode::BAD_REQUEST,
        FailureKind::Upstream => StatusCode::BAD_GATEWAY,
        FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a pipeline failure as its `{error}` body.
pub fn failure_response(failure: FailureResponse) -> Response {
    (failure_status(failure.kind), Json(failure)).into_response()
}
