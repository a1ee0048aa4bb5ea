//! Doorman API client

pub mod auth;
pub mod error;
pub mod session;

use doorman_core::envelope::{ApiError, ApiResponse};
use doorman_core::{MemoryTokenStore, TokenStore};
use error::ClientError;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

/// Callback fired when a refresh failure invalidates the whole session
///
/// The embedding application decides what "go back to the login surface"
/// means for it.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Doorman API client
///
/// Holds the HTTP connection pool, the backend base URL and the injected
/// token store. Cloning is cheap; clones share the pool and the store.
#[derive(Clone)]
pub struct DoormanClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl DoormanClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> DoormanClientBuilder {
        DoormanClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store backing this client
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    pub(crate) fn notify_session_expired(&self) {
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }

    /// Execute a request expecting an envelope with a payload
    pub(crate) async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        Self::require_payload(Self::parse_envelope(response).await?)
    }

    /// Execute a request where only the envelope's success flag matters
    pub(crate) async fn execute_ok(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = request.send().await?;
        Self::parse_envelope::<JsonValue>(response).await?;
        Ok(())
    }

    /// Decode a response envelope, surfacing application failures as errors
    ///
    /// Error statuses still carry an envelope body when the failure came
    /// from the application; those keep their message and error code instead
    /// of collapsing into a bare status error.
    pub(crate) async fn parse_envelope<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
            return Ok(envelope.into_result()?);
        }

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(envelope) => match envelope.into_result() {
                Err(api) => Err(ClientError::Api(api)),
                Ok(_) => Err(ClientError::from_status(status, body)),
            },
            Err(_) => {
                let message = if body.is_empty() {
                    status.to_string()
                } else {
                    body
                };
                Err(ClientError::from_status(status, message))
            }
        }
    }

    pub(crate) fn require_payload<T>(payload: Option<T>) -> Result<T, ClientError> {
        payload.ok_or_else(|| {
            ClientError::Api(ApiError {
                message: "response envelope carries no payload".to_string(),
                error_code: None,
            })
        })
    }
}

/// Extra request parameters for the authenticated fetch wrapper
///
/// Caller headers win for every key except `Authorization`, which is always
/// taken from the token store.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub body: Option<JsonValue>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to the request
    pub fn header(
        mut self,
        name: reqwest::header::HeaderName,
        value: reqwest::header::HeaderValue,
    ) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set a JSON body
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Builder for DoormanClient
#[derive(Default)]
pub struct DoormanClientBuilder {
    base_url: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl DoormanClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Inject the token store; defaults to a fresh in-memory store
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Register the session-expired callback
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DoormanClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();

        let mut builder = ClientBuilder::new().user_agent(
            self.user_agent
                .unwrap_or_else(|| "doorman-client/0.1.0".to_string()),
        );
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(DoormanClient {
            client,
            base_url,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
            on_session_expired: self.on_session_expired,
        })
    }
}
