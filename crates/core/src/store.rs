//! Injectable token store contract and the in-memory implementation
//!
//! The store models a flat, process-scoped key-value namespace. Access is
//! synchronous and last-write-wins; callers that race on the same key get
//! whichever write lands last.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::RwLock;

/// Well-known store keys
pub mod keys {
    /// Serialized user record (JSON string)
    pub const USER: &str = "user";
    /// Short-lived credential attached to authenticated requests
    pub const ACCESS_TOKEN: &str = "accessToken";
    /// Longer-lived credential used to obtain a new access token
    pub const REFRESH_TOKEN: &str = "refreshToken";
}

/// Key-value store holding session credentials
///
/// Values are opaque strings until consumed. Any subset of the well-known
/// keys may be present; nothing enforces relational integrity between them.
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str);

    /// Delete the entry under `key`, if any
    fn remove(&self, key: &str);
}

/// Session credentials as issued by login or refresh responses
///
/// Every field is optional: a refresh response may carry only a new access
/// token, and the store helpers persist exactly the fields present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Typed accessors layered over the raw key-value contract
pub trait TokenStoreExt: TokenStore {
    /// Current access token, if one is stored
    fn access_token(&self) -> Option<String> {
        self.get(keys::ACCESS_TOKEN)
    }

    /// Current refresh token, if one is stored
    fn refresh_token(&self) -> Option<String> {
        self.get(keys::REFRESH_TOKEN)
    }

    /// Stored user record, if present and parseable
    fn stored_user(&self) -> Option<JsonValue> {
        self.get(keys::USER)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Persist the fields present in `tokens`, leaving absent ones untouched
    fn store_session(&self, tokens: &SessionTokens) {
        if let Some(user) = &tokens.user {
            if let Ok(raw) = serde_json::to_string(user) {
                self.set(keys::USER, &raw);
            }
        }
        if let Some(access) = &tokens.access_token {
            self.set(keys::ACCESS_TOKEN, access);
        }
        if let Some(refresh) = &tokens.refresh_token {
            self.set(keys::REFRESH_TOKEN, refresh);
        }
    }

    /// Remove the user record and both tokens together
    fn clear_session(&self) {
        self.remove(keys::USER);
        self.remove(keys::ACCESS_TOKEN);
        self.remove(keys::REFRESH_TOKEN);
    }
}

impl<T: TokenStore + ?Sized> TokenStoreExt for T {}

/// In-memory token store
///
/// The default store for native callers and the substitution point for
/// tests; scoped to the process the way browser storage is scoped to a tab.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.remove(key);
        }
    }
}
