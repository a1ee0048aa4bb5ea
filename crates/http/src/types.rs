//! Request and response types for the auth API
//!
//! Wire field names are camelCase; the serde renames keep the Rust side
//! snake_case.

use doorman_core::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

pub use doorman_core::SessionTokens;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub usr_login_id: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub usr_login_id: String,
    /// Display name
    pub usr_nm: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_num: Option<String>,
}

impl SignupRequest {
    /// Run the local field checks the signup form performs before submitting
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_login_id(&self.usr_login_id)?;
        if self.usr_nm.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)?;
        Ok(())
    }
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub usr_id: serde_json::Value,
}

/// Payload of the login-id duplication check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIdData {
    #[serde(default)]
    pub duplicate: bool,
}
