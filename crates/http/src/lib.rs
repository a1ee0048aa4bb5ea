//! Doorman HTTP client
//!
//! Talks to the backend auth service: typed endpoint methods for the public
//! surface (login, signup, id check) and an authenticated fetch wrapper that
//! attaches the stored bearer token and retries once after a token refresh.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{DoormanClient, DoormanClientBuilder, RequestOptions};
