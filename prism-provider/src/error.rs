//! Error types for the provider client

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur when talking to the upstream provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Provider returned an error status code
    #[error("Provider error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Response body was missing an expected element (e.g., empty choices)
    #[error("Provider response missing {0}")]
    EmptyResponse(&'static str),
}

impl ProviderError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if the provider rejected the request for rate-limiting reasons
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::ApiError { status: 429, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let not_found = ProviderError::api_error(404, "no such thread");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let rate_limited = ProviderError::api_error(429, "slow down");
        assert!(rate_limited.is_rate_limited());
        assert!(rate_limited.is_client_error());

        let upstream = ProviderError::api_error(500, "boom");
        assert!(upstream.is_server_error());
        assert!(!upstream.is_client_error());
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::api_error(400, "invalid assistant");
        assert_eq!(
            err.to_string(),
            "Provider error (status 400): invalid assistant"
        );
    }
}
