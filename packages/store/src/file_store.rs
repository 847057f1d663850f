//! # Filesystem-backed token store
//!
//! [`FileStore`] is a [`TokenStore`] implementation that keeps each key in its own
//! file. It is the native stand-in for browser `localStorage`, so a desktop build
//! keeps its session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # file containing the stored value
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/diary/` on Linux.
//!
//! I/O failures are logged and otherwise treated like missing data.

use std::path::PathBuf;

use crate::session::TokenStore;

/// Filesystem-backed TokenStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.path(key), value) {
            tracing::warn!("failed to persist `{}`: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove `{}`: {}", key, e),
        }
    }
}
