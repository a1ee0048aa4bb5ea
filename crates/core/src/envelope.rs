//! Response envelope shared by every backend endpoint

use crate::codes;
use serde::{Deserialize, Serialize};

/// Envelope wrapping every API payload
///
/// The server emits `{success, message, data, errorCode, timestamp}` and
/// omits null fields, so everything but the flag is optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Split the envelope into its success payload or application failure
    ///
    /// A success envelope may legitimately carry no payload; callers that
    /// require one decide how to treat `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError {
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
                error_code: self.error_code,
            })
        }
    }
}

/// Application-level failure reported inside a response envelope
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub error_code: Option<String>,
}

impl ApiError {
    /// Whether this failure invalidates the refresh token itself
    ///
    /// Keys off the stable error codes first and falls back to message
    /// markers for servers that omit codes.
    pub fn invalidates_refresh_token(&self) -> bool {
        if let Some(code) = &self.error_code {
            return code == codes::AUTH_REFRESH_TOKEN_EXPIRED
                || code == codes::AUTH_REFRESH_TOKEN_INVALID;
        }
        let message = self.message.to_lowercase();
        message.contains("invalid") || message.contains("expired")
    }
}
