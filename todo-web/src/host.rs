//! Browser facilities the session and todo logic depend on.
//!
//! Everything that touches `window` goes through [`Host`], so the logic in
//! `session` and `todo_actions` also runs on the native test target.

use crate::config::FrontendConfig;
use gloo_storage::{LocalStorage, Storage};
use tracing::error;

/// Durable token storage, hard navigation and blocking confirmation.
pub trait Host {
    /// Token persisted by a previous session, if any.
    fn stored_token(&self) -> Option<String>;
    /// Persist the session token.
    fn store_token(&self, token: &str);
    /// Forget the persisted token.
    fn remove_token(&self);
    /// Full page navigation to the application root.
    fn navigate_to_root(&self);
    /// Ask the user a yes/no question, blocking until answered.
    fn confirm(&self, message: &str) -> bool;
}

/// [`Host`] backed by `window.localStorage`, `window.location` and
/// `window.confirm`.
#[derive(Debug, Clone)]
pub struct WebHost {
    storage_key: String,
}

impl WebHost {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            storage_key: config.token_storage_key().to_string(),
        }
    }
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new(&FrontendConfig::new())
    }
}

impl Host for WebHost {
    fn stored_token(&self) -> Option<String> {
        // Raw access: the token is stored as a bare string, not JSON.
        LocalStorage::raw()
            .get_item(&self.storage_key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn store_token(&self, token: &str) {
        if let Err(err) = LocalStorage::raw().set_item(&self.storage_key, token) {
            error!(?err, "failed to persist session token");
        }
    }

    fn remove_token(&self) {
        LocalStorage::delete(&self.storage_key);
    }

    fn navigate_to_root(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href("/") {
            error!(?err, "failed to navigate to the application root");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
