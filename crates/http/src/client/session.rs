//! Token refresh, the authenticated fetch wrapper and logout
//!
//! The wrapper is a two-state policy: one initial attempt, and one retry
//! allowed only after a 401 when a refresh token is on hand. A second 401
//! on the retried request is returned as-is; there is no refresh loop.

use super::{DoormanClient, RequestOptions};
use super::error::ClientError;
use crate::types::{LogoutRequest, RefreshRequest, SessionTokens};
use doorman_core::envelope::ApiResponse;
use doorman_core::TokenStoreExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use tracing::{debug, warn};

impl DoormanClient {
    /// Obtain a fresh access token using the stored refresh token
    ///
    /// Returns the new access token, or `None` when no refresh token is
    /// stored or the refresh was rejected. Transport and decode failures
    /// are logged and swallowed; the refresh is never retried. A rejection
    /// that invalidates the refresh token itself clears the whole session
    /// and fires the session-expired hook.
    pub async fn refresh_access_token(&self) -> Option<String> {
        let Some(refresh_token) = self.store().refresh_token() else {
            debug!("no refresh token stored, skipping refresh");
            return None;
        };

        let request = self
            .request(Method::POST, "/api/refresh")
            .json(&RefreshRequest { refresh_token });

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "token refresh request failed");
                return None;
            }
        };

        let status = response.status();
        let envelope: ApiResponse<SessionTokens> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(error = %err, "token refresh response unreadable");
                return None;
            }
        };

        match envelope.into_result() {
            Ok(Some(tokens)) if status.is_success() => {
                self.store().store_session(&tokens);
                if tokens.refresh_token.is_some() {
                    debug!("access and refresh tokens reissued");
                } else {
                    debug!("access token reissued");
                }
                tokens.access_token
            }
            Ok(_) => {
                warn!(%status, "token refresh returned no usable payload");
                None
            }
            Err(api) => {
                warn!(message = %api.message, code = ?api.error_code, "token refresh rejected");
                if api.invalidates_refresh_token() {
                    self.logout().await;
                    self.notify_session_expired();
                }
                None
            }
        }
    }

    /// Issue a request with the stored bearer token, retrying once after a
    /// token refresh when the server answers 401
    ///
    /// Without a stored access token the request goes out unauthenticated.
    /// The final response, original or retried, is returned for the caller
    /// to interpret.
    pub async fn authenticated_fetch(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let token = self.store().access_token();
        let response = self
            .send_authenticated(&method, path, &options, token.as_deref())
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED || self.store().refresh_token().is_none() {
            return Ok(response);
        }

        debug!(%path, "access token rejected, attempting refresh");
        match self.refresh_access_token().await {
            Some(token) => {
                self.send_authenticated(&method, path, &options, Some(&token))
                    .await
            }
            None => Ok(response),
        }
    }

    /// Fetch the current user's record through the authenticated wrapper
    pub async fn user_info(&self) -> Result<serde_json::Value, ClientError> {
        let response = self
            .authenticated_fetch(Method::GET, "/api/user", RequestOptions::new())
            .await?;
        Self::require_payload(Self::parse_envelope(response).await?)
    }

    /// End the session: best-effort server notification, then clear the store
    ///
    /// The server call is skipped when no stored user id is available and
    /// its failures are only logged; the local session is cleared either way.
    pub async fn logout(&self) {
        let usr_id = self
            .store()
            .stored_user()
            .and_then(|user| user.get("usrId").cloned());

        if let Some(usr_id) = usr_id {
            let request = self
                .request(Method::POST, "/api/logout")
                .json(&LogoutRequest { usr_id });
            if let Err(err) = request.send().await {
                warn!(error = %err, "logout request failed");
            }
        }

        self.store().clear_session();
    }

    async fn send_authenticated(
        &self,
        method: &Method,
        path: &str,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<Response, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ClientError::Configuration(
                    "stored access token contains invalid header characters".to_string(),
                )
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut request = self.request(method.clone(), path).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}
