//! Session context and platform wiring for the UI.
//!
//! [`SessionProvider`] installs a [`SessionHandle`] in the component tree. The handle
//! reads the token straight from the platform [`store::TokenStore`] every time, and
//! bumps a revision signal on sign-in and sign-out so that anything that asked
//! [`SessionHandle::is_authenticated`] (the route guard, the navbar) re-renders.
//!
//! | Platform | Token storage | Configuration |
//! |----------|---------------|---------------|
//! | Web (WASM + `web` feature) | `window.localStorage` via [`store::LocalStorageStore`] | defaults + build-time `DIARY_API_BASE_URL` |
//! | Desktop (native) | `<data_dir>/diary/` via [`store::FileStore`] | `<data_dir>/diary/diary.toml` if present |

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{DiaryConfig, Session};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("diary")
}

/// Load the client configuration for this platform.
pub fn load_config() -> DiaryConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(DiaryConfig::filename());
        match DiaryConfig::load(&path) {
            Ok(config) => config.with_build_overrides(),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", path.display(), e);
                DiaryConfig::default().with_build_overrides()
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        DiaryConfig::default().with_build_overrides()
    }
}

/// Create the session backed by this platform's durable storage.
pub fn make_session(config: &DiaryConfig) -> Session<PlatformStore> {
    let key = config.session.token_key.as_str();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::with_key(store::LocalStorageStore::new(), key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Session::with_key(store::MemoryStore::new(), key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Session::with_key(store::FileStore::new(data_dir()), key)
    }
}

/// Build the one API client the app shares. Logs and yields `None` when the
/// configured backend cannot be used.
fn build_client(
    config: &DiaryConfig,
    session: Session<PlatformStore>,
) -> Option<ApiClient<PlatformStore>> {
    match ApiClient::new(&config.api, session) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!("cannot reach {}: {}", config.api.base_url, e);
            None
        }
    }
}

/// The session as seen by components.
#[derive(Clone)]
pub struct SessionHandle {
    session: Session<PlatformStore>,
    client: Option<ApiClient<PlatformStore>>,
    base_url: String,
    revision: Signal<u64>,
}

impl SessionHandle {
    /// Whether a token is stored right now. Subscribes the caller to sign-in/out.
    pub fn is_authenticated(&self) -> bool {
        let _revision = self.revision.read();
        self.session.is_authenticated()
    }

    /// Install a freshly issued token.
    pub fn sign_in(&self, token: &str) {
        self.session.set_token(token);
        self.bump();
    }

    pub fn sign_out(&self) {
        self.session.remove_token();
        self.bump();
    }

    fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }

    /// The shared API client. Clones reuse its connection pool and this session.
    pub fn client(&self) -> Result<ApiClient<PlatformStore>, ApiError> {
        self.client
            .clone()
            .ok_or_else(|| ApiError::InvalidBaseUrl(self.base_url.clone()))
    }
}

/// Get the session handle installed by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session and API client for the whole app.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let revision = use_signal(|| 0u64);

    use_context_provider(move || {
        let config = load_config();
        let session = make_session(&config);
        SessionHandle {
            client: build_client(&config, session.clone()),
            session,
            base_url: config.api.base_url,
            revision,
        }
    });

    rsx! {
        {children}
    }
}

/// Ask the user to confirm a destructive action. Always `true` off the web.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
