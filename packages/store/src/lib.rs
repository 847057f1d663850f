//! Client-side state and data for the diary: models, token storage, search and configuration.

pub mod config;
pub mod filter;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{ConfigError, DiaryConfig};
pub use filter::filter_entries;
pub use models::{
    AuthResponse, Entry, EntryDraft, EntryId, EntryStats, LoginRequest, RegisterRequest,
    ValidationError, MOOD_PRESETS,
};
pub use session::{Session, TokenStore};
