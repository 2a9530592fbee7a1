//! Session state and the store that owns its lifecycle.
//!
//! [`Session`] lives in a yewdux store so any component can read it. Writes
//! go through [`SessionAction`]s, and only [`SessionStore`] issues them,
//! keeping durable storage and in-memory state in step.

use crate::api::TodoClient;
use crate::host::Host;
use shared::models::UserProfile;
use std::fmt;
use std::rc::Rc;
use tracing::{info, warn};
use yewdux::{Dispatch, Reducer, Store};

/// Authentication state of the application.
///
/// `user` is only ever set while `token` is set and has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
    loading: bool,
}

impl Default for Session {
    /// The state at process start: nothing known, verification pending.
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// True until the startup verification has resolved.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    fn holds(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }

    fn transition(&self, action: SessionAction) -> Self {
        match action {
            SessionAction::Restore(Some(token)) => Self {
                token: Some(token),
                user: None,
                loading: true,
            },
            SessionAction::Restore(None) | SessionAction::LogOut => Self {
                token: None,
                user: None,
                loading: false,
            },
            SessionAction::Verified { token, user } if self.holds(&token) => Self {
                token: Some(token),
                user: Some(user),
                loading: false,
            },
            SessionAction::VerificationFailed { token } if self.holds(&token) => Self {
                token: None,
                user: None,
                loading: false,
            },
            // Verification outcome for a token that has since been replaced.
            SessionAction::Verified { .. } | SessionAction::VerificationFailed { .. } => Self {
                loading: false,
                ..self.clone()
            },
            SessionAction::LogIn { token, user } => Self {
                token: Some(token),
                user: Some(user),
                loading: false,
            },
        }
    }
}

/// Every way the session can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Startup: adopt the stored token, if any, pending verification.
    Restore(Option<String>),
    /// The backend accepted `token` and returned its profile.
    Verified { token: String, user: UserProfile },
    /// The backend rejected `token`, or could not be reached.
    VerificationFailed { token: String },
    /// A fresh login completed.
    LogIn { token: String, user: UserProfile },
    /// The user signed out or the session expired.
    LogOut,
}

impl Reducer<Session> for SessionAction {
    fn apply(self, state: Rc<Session>) -> Rc<Session> {
        Rc::new(state.transition(self))
    }
}

/// Handle for the session shared through a Yew context.
///
/// It is the only writer of the session store and of the persisted token.
#[derive(Clone)]
pub struct SessionStore {
    dispatch: Dispatch<Session>,
    host: Rc<dyn Host>,
}

impl SessionStore {
    pub fn new(dispatch: Dispatch<Session>, host: Rc<dyn Host>) -> Self {
        Self { dispatch, host }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Rc<Session> {
        self.dispatch.get()
    }

    pub fn token(&self) -> Option<String> {
        self.session().token().map(str::to_string)
    }

    /// Browser facilities shared with the views.
    pub fn host(&self) -> Rc<dyn Host> {
        Rc::clone(&self.host)
    }

    /// Startup check: adopt the stored token and verify it with the backend.
    ///
    /// A rejected or unverifiable token is dropped from storage; the user
    /// simply ends up signed out.
    pub async fn restore(&self, client: &TodoClient) {
        let stored = self.host.stored_token();
        self.dispatch.apply(SessionAction::Restore(stored.clone()));
        let Some(token) = stored else {
            info!("no stored session token");
            return;
        };

        match client.me(&token).await {
            Ok(user) => {
                info!(username = %user.username, "session restored");
                self.dispatch.apply(SessionAction::Verified { token, user });
            }
            Err(err) => {
                warn!(error = %err, "stored session token could not be verified");
                if self.host.stored_token().as_deref() == Some(token.as_str()) {
                    self.host.remove_token();
                }
                self.dispatch
                    .apply(SessionAction::VerificationFailed { token });
            }
        }
    }

    /// Adopt a freshly issued token and its profile, and persist the token.
    pub fn login(&self, token: String, user: UserProfile) {
        info!(username = %user.username, "logged in");
        self.host.store_token(&token);
        self.dispatch.apply(SessionAction::LogIn { token, user });
    }

    /// Drop the session everywhere and reload the application root.
    pub fn logout(&self) {
        info!("logging out");
        self.dispatch.apply(SessionAction::LogOut);
        self.host.remove_token();
        self.host.navigate_to_root();
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.host, &other.host)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}
