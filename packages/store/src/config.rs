//! # Client configuration: `diary.toml`
//!
//! Defines where the backend lives and how the session is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5067/api"
//! timeout_secs = 30          # native builds only
//!
//! [session]
//! token_key = "token"        # localStorage / file key for the bearer token
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is equivalent
//! to the default configuration. The browser has no process environment, so the base
//! URL can also be baked in at build time through `DIARY_API_BASE_URL`
//! (see [`DiaryConfig::with_build_overrides`]).

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_TOKEN_KEY;

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5067/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DiaryConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.api.timeout_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "diary.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a TOML file. A missing file yields the default configuration.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Apply values baked in at compile time (`DIARY_API_BASE_URL`).
    pub fn with_build_overrides(mut self) -> Self {
        if let Some(base_url) = option_env!("DIARY_API_BASE_URL") {
            self.api.base_url = base_url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiaryConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5067/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.session.token_key, "token");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = DiaryConfig::from_toml("[api]\nbase_url = \"https://diary.example/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://diary.example/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.session, SessionConfig::default());

        assert_eq!(DiaryConfig::from_toml("").unwrap(), DiaryConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DiaryConfig::new("http://127.0.0.1:9000/api").with_timeout(5);
        let raw = config.to_toml().unwrap();
        assert_eq!(DiaryConfig::from_toml(&raw).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = DiaryConfig::from_toml("[api]\ntimeout_secs = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = std::env::temp_dir().join(format!("diary_missing_{}.toml", std::process::id()));
        assert_eq!(DiaryConfig::load(&path).unwrap(), DiaryConfig::default());
    }
}
