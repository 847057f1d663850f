//! # HTTP client adapter
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with the backend base URL and a JSON
//! content type, and reads the [`Session`] before every request: when a token is
//! present it goes out as `Authorization: Bearer <token>`, otherwise the request is
//! sent without credentials and the server decides.
//!
//! The client never changes the session itself. A `401` surfaces as an ordinary
//! [`ApiError::Server`]; signing out is left to the user.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::config::ApiConfig;
use store::{Session, TokenStore};

use crate::error::{ApiError, ErrorBody};

/// HTTP client for the diary backend.
#[derive(Clone, Debug)]
pub struct ApiClient<S: TokenStore> {
    http: reqwest::Client,
    base_url: String,
    session: Session<S>,
}

impl<S: TokenStore> ApiClient<S> {
    /// Create a client for the backend described by `config`.
    pub fn new(config: &ApiConfig, session: Session<S>) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(config.base_url.clone()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let builder = reqwest::Client::builder().default_headers(headers);

        #[cfg(not(target_arch = "wasm32"))]
        let builder = if config.timeout_secs > 0 {
            builder.timeout(std::time::Duration::from_secs(config.timeout_secs))
        } else {
            builder
        };

        let http = builder.build().map_err(ApiError::Network)?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Absolute URL for an API path such as `/Entry/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the session token when there is one.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let builder = self.http.request(method, self.url(path));
        match self.session.get_token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Build a request without sending it.
    pub fn build_request(&self, method: Method, path: &str) -> Result<reqwest::Request, ApiError> {
        self.request(method, path).build().map_err(ApiError::Network)
    }

    /// Send a request and turn any non-success status into [`ApiError::Server`].
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("request failed: {}", e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(raw) => ErrorBody::from_text(raw),
            Err(_) => ErrorBody::Empty,
        };
        tracing::warn!("server responded {}: {:?}", status, body);
        Err(ApiError::Server { status, body })
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(ApiError::Decode)
    }
}
