//! The admin credential, resolved once at startup.
//!
//! Views never reach into browser storage themselves: the session is loaded
//! when the app boots and passed down explicitly. Operations that require a
//! credential and find none are logged and abandoned before any request is
//! issued.

/// Local-storage key the credential is persisted under.
pub const STORAGE_KEY: &str = "token";

/// Bearer credential attached to authorized API calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A session with no credential; mutations on protected resources are
    /// abandoned client-side.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Read the credential from browser local storage (wasm targets).
    /// Elsewhere this yields an anonymous session.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let token = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
                .filter(|token| !token.is_empty());
            if token.is_none() {
                tracing::warn!("no stored credential; protected operations will be abandoned");
            }
            Self { token }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::anonymous()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
