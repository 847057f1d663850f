//! Registration and login.
//!
//! Both calls return the issued token and leave the [`store::Session`] untouched;
//! installing the token is up to the caller.

use reqwest::Method;
use store::{AuthResponse, LoginRequest, RegisterRequest, TokenStore};

use crate::client::ApiClient;
use crate::error::ApiError;

pub const REGISTER_PATH: &str = "/Auth/register";
pub const LOGIN_PATH: &str = "/Auth/login";

/// Auth endpoints of an [`ApiClient`].
pub struct AuthApi<'a, S: TokenStore> {
    client: &'a ApiClient<S>,
}

impl<'a, S: TokenStore> AuthApi<'a, S> {
    pub(crate) fn new(client: &'a ApiClient<S>) -> Self {
        Self { client }
    }

    /// Create an account and return its token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let response: AuthResponse = self
            .client
            .send_json(self.client.request(Method::POST, REGISTER_PATH).json(request))
            .await?;
        tracing::info!("registered {}", request.email);
        Ok(response.token)
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response: AuthResponse = self
            .client
            .send_json(self.client.request(Method::POST, LOGIN_PATH).json(request))
            .await?;
        tracing::info!("logged in {}", request.email);
        Ok(response.token)
    }
}

impl<S: TokenStore> ApiClient<S> {
    pub fn auth(&self) -> AuthApi<'_, S> {
        AuthApi::new(self)
    }
}
