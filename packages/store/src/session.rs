//! # Session store: the single auth token of this client
//!
//! [`Session`] owns the bearer token for the current tab (or process). It is a thin
//! layer over a synchronous [`TokenStore`] backend, so the same logic works against
//! browser `localStorage` ([`crate::LocalStorageStore`]), a directory on disk
//! ([`crate::FileStore`]) or an in-memory map ([`crate::MemoryStore`]) in tests.
//!
//! The token is opaque: no shape or expiry checks happen here. Whether it is still
//! valid is decided by the server on the next call. An empty stored value counts as
//! no token at all.

/// Key under which the token is persisted unless configured otherwise.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Synchronous string key-value storage that survives reloads.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The auth session of this client, backed by a [`TokenStore`].
#[derive(Clone, Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    key: String,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Persist `token`, replacing any previous one.
    pub fn set_token(&self, token: &str) {
        self.store.set(&self.key, token);
        tracing::debug!("session token stored under `{}`", self.key);
    }

    pub fn get_token(&self) -> Option<String> {
        self.store.get(&self.key).filter(|token| !token.is_empty())
    }

    pub fn remove_token(&self) {
        self.store.remove(&self.key);
        tracing::debug!("session token cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}
