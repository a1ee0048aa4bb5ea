//! Client error types

use doorman_core::codes;
use doorman_core::envelope::ApiError;
use doorman_core::validation::ValidationError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Application-level failure reported in a response envelope
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local field validation failed before the request was sent
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected the caller's credentials
    pub fn is_auth_expired(&self) -> bool {
        match self {
            Self::AuthenticationFailed(_) => true,
            Self::Api(api) => matches!(
                api.error_code.as_deref(),
                Some(
                    codes::AUTH_TOKEN_EXPIRED | codes::AUTH_TOKEN_INVALID | codes::AUTH_UNAUTHORIZED
                )
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let err = ClientError::from_status(reqwest::StatusCode::UNAUTHORIZED, "denied".into());
        assert!(matches!(err, ClientError::AuthenticationFailed(_)));
        assert!(err.is_auth_expired());

        let err = ClientError::from_status(reqwest::StatusCode::BAD_GATEWAY, "boom".into());
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn envelope_auth_codes_count_as_expired() {
        let err = ClientError::Api(ApiError {
            message: "access token expired".to_string(),
            error_code: Some(codes::AUTH_TOKEN_EXPIRED.to_string()),
        });
        assert!(err.is_auth_expired());

        let err = ClientError::Api(ApiError {
            message: "duplicate id".to_string(),
            error_code: Some(codes::VALIDATION_FAILED.to_string()),
        });
        assert!(!err.is_auth_expired());
    }
}
