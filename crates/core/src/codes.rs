//! Server error codes consumed by the client
//!
//! The backend tags application-level failures with a stable code alongside
//! the human-readable message. Only the codes the client branches on are
//! listed here.

pub const AUTH_INVALID_CREDENTIALS: &str = "AUTH_001";
pub const AUTH_ACCOUNT_LOCKED: &str = "AUTH_002";
pub const AUTH_ACCOUNT_DISABLED: &str = "AUTH_003";
pub const AUTH_TOKEN_EXPIRED: &str = "AUTH_004";
pub const AUTH_TOKEN_INVALID: &str = "AUTH_005";
pub const AUTH_REFRESH_TOKEN_EXPIRED: &str = "AUTH_006";
pub const AUTH_REFRESH_TOKEN_INVALID: &str = "AUTH_007";
pub const AUTH_UNAUTHORIZED: &str = "AUTH_008";

pub const USER_NOT_FOUND: &str = "USER_001";
pub const SERVER_ERROR: &str = "SRV_001";
pub const VALIDATION_FAILED: &str = "VAL_001";
