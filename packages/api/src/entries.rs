//! CRUD calls on the `/Entry` collection.
//!
//! Each operation is exactly one HTTP call. Nothing is cached or retried here; the
//! page holding the list decides what to keep.

use reqwest::Method;
use store::{Entry, EntryDraft, EntryId, TokenStore};

use crate::client::ApiClient;
use crate::error::ApiError;

pub const ENTRY_PATH: &str = "/Entry";

fn entry_path(id: EntryId) -> String {
    format!("{ENTRY_PATH}/{id}")
}

/// Entry endpoints of an [`ApiClient`].
pub struct EntryApi<'a, S: TokenStore> {
    client: &'a ApiClient<S>,
}

impl<'a, S: TokenStore> EntryApi<'a, S> {
    pub(crate) fn new(client: &'a ApiClient<S>) -> Self {
        Self { client }
    }

    /// All entries of the signed-in user, in server order.
    pub async fn list(&self) -> Result<Vec<Entry>, ApiError> {
        self.client
            .send_json(self.client.request(Method::GET, ENTRY_PATH))
            .await
    }

    pub async fn get(&self, id: EntryId) -> Result<Entry, ApiError> {
        self.client
            .send_json(self.client.request(Method::GET, &entry_path(id)))
            .await
    }

    /// Create an entry; the server assigns `id` and `createdAt`.
    pub async fn create(&self, draft: &EntryDraft) -> Result<Entry, ApiError> {
        let entry: Entry = self
            .client
            .send_json(self.client.request(Method::POST, ENTRY_PATH).json(draft))
            .await?;
        tracing::debug!("created entry {}", entry.id);
        Ok(entry)
    }

    /// Replace title, content and mood of entry `id`.
    pub async fn update(&self, id: EntryId, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.client
            .send_json(self.client.request(Method::PUT, &entry_path(id)).json(draft))
            .await
    }

    /// Delete entry `id`. Deleting it again fails with a not-found error.
    pub async fn delete(&self, id: EntryId) -> Result<(), ApiError> {
        self.client
            .send(self.client.request(Method::DELETE, &entry_path(id)))
            .await?;
        tracing::debug!("deleted entry {}", id);
        Ok(())
    }
}

impl<S: TokenStore> ApiClient<S> {
    pub fn entries(&self) -> EntryApi<'_, S> {
        EntryApi::new(self)
    }
}
