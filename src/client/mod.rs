//! HTTP gateway to the backend API.
//!
//! Every outbound call funnels through [`ApiClient::execute`], which attaches
//! default JSON headers, bearer auth when a token is held, and classifies
//! failures into [`ApiError`] exactly once. No timeout, no retry; callers
//! translate errors into contextual user-facing messages.

pub mod auth;
pub mod game;
pub mod rooms;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ApiError;

/// Thin client over `reqwest`, shared by every view.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Attach or clear the bearer token used for authenticated calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn builder(&self, method: Method, path: &str) -> (RequestBuilder, String) {
        let url = self.config.endpoint(path);
        let mut req = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        (req, url)
    }

    /// Send a request, mapping transport failures to [`ApiError::Network`]
    /// and non-2xx statuses through [`ApiError::from_status`].
    async fn execute(req: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        tracing::debug!(%url, "api request");
        let response = req.send().await.map_err(|err| {
            tracing::warn!(%url, error = %err, "api request failed to send");
            ApiError::Network {
                url: url.to_string(),
            }
        })?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "api response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (req, url) = self.builder(Method::GET, path);
        let response = Self::execute(req, &url).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (req, url) = self.builder(Method::POST, path);
        let response = Self::execute(req.json(body), &url).await?;
        Self::decode(response).await
    }

    /// POST with no body, discarding whatever the server returns.
    pub(crate) async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        let (req, url) = self.builder(Method::POST, path);
        Self::execute(req, &url).await?;
        Ok(())
    }

    /// POST a JSON body, discarding whatever the server returns.
    pub(crate) async fn post_unit_with<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let (req, url) = self.builder(Method::POST, path);
        Self::execute(req.json(body), &url).await?;
        Ok(())
    }

    pub(crate) async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let (req, url) = self.builder(Method::PUT, path);
        Self::execute(req.json(body), &url).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let (req, url) = self.builder(Method::DELETE, path);
        Self::execute(req.json(body), &url).await?;
        Ok(())
    }

    /// POST a multipart form. The Content-Type header is left to `reqwest`
    /// so the multipart boundary is set correctly.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        let mut req = self.http.post(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Self::execute(req.multipart(form), &url).await?;
        Ok(())
    }
}
