//! Public auth endpoints: login, signup, login-id check

use super::DoormanClient;
use super::error::ClientError;
use crate::types::{CheckIdData, LoginRequest, SessionTokens, SignupRequest};
use doorman_core::TokenStoreExt;
use doorman_core::validation;
use reqwest::Method;
use tracing::debug;

impl DoormanClient {
    /// Authenticate with login id and password
    ///
    /// On success the issued tokens and the user record are written to the
    /// token store before the payload is returned.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionTokens, ClientError> {
        let req = self.request(Method::POST, "/api/login").json(request);
        let tokens: SessionTokens = self.execute(req).await?;
        self.store().store_session(&tokens);
        debug!(login_id = %request.usr_login_id, "login succeeded");
        Ok(tokens)
    }

    /// Register a new account
    ///
    /// Runs the local field checks first; ill-formed input never reaches
    /// the network.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ClientError> {
        request.validate()?;
        let req = self.request(Method::POST, "/api/signup").json(request);
        self.execute_ok(req).await
    }

    /// Check whether a login id is already taken
    pub async fn check_login_id(&self, usr_login_id: &str) -> Result<bool, ClientError> {
        validation::validate_login_id(usr_login_id)?;
        let req = self
            .request(Method::GET, "/api/check-id")
            .query(&[("usrLoginId", usr_login_id)]);
        let data: CheckIdData = self.execute(req).await?;
        Ok(data.duplicate)
    }
}
