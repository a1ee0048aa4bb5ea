//! Doorman core types and contracts

pub mod codes;
pub mod envelope;
pub mod store;
pub mod validation;

pub use envelope::{ApiError, ApiResponse};
pub use store::{MemoryTokenStore, SessionTokens, TokenStore, TokenStoreExt, keys};
pub use validation::{PasswordStrength, ValidationError};
