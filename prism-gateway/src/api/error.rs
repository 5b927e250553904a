//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use prism_provider::ProviderError;

use crate::poller::PollError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UpstreamError(ProviderError),
    RunFailed(prism_core::domain::run::RunStatus),
    PollTimeout,
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UpstreamError(err) => {
                tracing::error!("Upstream provider error: {}", err);
                let status = if err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if err.is_rate_limited() {
                    StatusCode::TOO_MANY_REQUESTS
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (status, err.to_string())
            }
            ApiError::RunFailed(run_status) => (
                StatusCode::BAD_GATEWAY,
                format!("Assistant run ended with status {}", run_status),
            ),
            ApiError::PollTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Assistant run did not complete in time".to_string(),
            ),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::UpstreamError(err)
    }
}

impl From<PollError> for ApiError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Provider(err) => ApiError::UpstreamError(err),
            PollError::RunFailed(status) => ApiError::RunFailed(status),
            PollError::TimedOut { .. } => ApiError::PollTimeout,
            PollError::Cancelled => ApiError::InternalError("Polling was cancelled".to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_upstream_status_mapping() {
        let resp = ApiError::from(ProviderError::api_error(404, "no thread")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::from(ProviderError::api_error(429, "slow down")).into_response();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        let resp = ApiError::from(ProviderError::api_error(500, "boom")).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_poll_error_mapping() {
        use prism_core::domain::run::RunStatus;

        let resp = ApiError::from(PollError::RunFailed(RunStatus::Expired)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = ApiError::from(PollError::TimedOut { attempts: 7 }).into_response();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
