//! # API crate: HTTP access to the diary backend
//!
//! Everything the frontend needs to talk to the backend: an HTTP client that carries
//! the session token, the auth and entry endpoints, and the error type pages turn
//! into inline messages.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, JSON content type, bearer token from the [`Session`] on every request |
//! | [`auth`] | `POST /Auth/register`, `POST /Auth/login` |
//! | [`entries`] | `GET/POST /Entry`, `GET/PUT/DELETE /Entry/{id}` |
//! | [`error`] | [`ApiError`], [`ErrorBody`] and the per-operation fallback messages |
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), api::ApiError> {
//! use api::{ApiClient, DiaryConfig, LoginRequest, MemoryStore, Session};
//!
//! let config = DiaryConfig::default();
//! let client = ApiClient::new(&config.api, Session::new(MemoryStore::new()))?;
//! let token = client.auth().login(&LoginRequest::new("ada@example.com", "secret")).await?;
//! client.session().set_token(&token);
//! let entries = client.entries().list().await?;
//! # let _ = entries;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod entries;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, ErrorBody};

pub use store::{
    AuthResponse, DiaryConfig, Entry, EntryDraft, EntryId, LoginRequest, MemoryStore,
    RegisterRequest, Session, TokenStore,
};
