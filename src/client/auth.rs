//! Auth endpoints: login, register and best-effort logout.

use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::LoginResponse;

impl ApiClient {
    /// POST credentials to the login endpoint.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidResponse`] if the response does not carry a token
    /// and player, in addition to the usual gateway errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let path = self.config().auth.login.clone();
        let response: LoginResponse = self
            .post(&path, &json!({ "email": email, "password": password }))
            .await?;
        Self::check_auth_response(response)
    }

    /// POST a new account to the register endpoint. Same response shape as
    /// login.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let path = self.config().auth.register.clone();
        let response: LoginResponse = self
            .post(
                &path,
                &json!({ "username": username, "email": email, "password": password }),
            )
            .await?;
        Self::check_auth_response(response)
    }

    /// Tell the backend the session is over. Failures are logged and
    /// swallowed; the local session is cleared regardless.
    pub async fn logout(&self) {
        let path = self.config().auth.logout.clone();
        if let Err(err) = self.post_unit(&path).await {
            tracing::debug!(error = %err, "logout call failed, clearing local session anyway");
        }
    }

    fn check_auth_response(response: LoginResponse) -> Result<LoginResponse, ApiError> {
        if response.token.trim().is_empty() {
            return Err(ApiError::InvalidResponse(
                "auth response missing token or player".to_string(),
            ));
        }
        Ok(response)
    }
}
