//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. Values go
//! straight into `window.localStorage`, which is synchronous and survives reloads of
//! the tab.
//!
//! All methods swallow storage errors (private browsing, quota, disabled storage):
//! reads return `None` and writes do nothing. The session then simply behaves as
//! signed out.

use crate::session::TokenStore;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("localStorage rejected write of `{}`", key);
                }
            }
            None => tracing::warn!("localStorage unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
