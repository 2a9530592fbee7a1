//! Credential sign-in, independent of the login form that drives it.

use crate::api::{ApiError, TodoClient};
use crate::session::SessionStore;
use shared::models::{LoginRequest, UserProfile};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a sign-in attempt ended without a session.
///
/// The `Display` text is what the login form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email and password are required")]
    Validation,
    /// The backend refused the credentials; carries its message.
    #[error("{0}")]
    Rejected(String),
    #[error("Login succeeded but no token was returned")]
    MissingToken,
    #[error("Failed to get user information")]
    ProfileUnavailable,
    #[error("{0}")]
    Network(String),
}

impl LoginError {
    fn from_transport(err: &ApiError) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::Network("Network error".to_string())
        } else {
            Self::Network(message)
        }
    }
}

/// Check both fields are filled in; the values are sent untrimmed.
pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, LoginError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(LoginError::Validation);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Run the whole sign-in: validate, exchange credentials for a token, fetch
/// the profile, then hand both to the session store.
///
/// The token is only persisted once the profile is known; if the profile
/// request fails the token is dropped.
pub async fn sign_in(
    client: &TodoClient,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> Result<UserProfile, LoginError> {
    let request = validate_credentials(email, password)?;

    let tokens = client.login(&request).await.map_err(|err| match err {
        ApiError::Status { message, .. } => LoginError::Rejected(message),
        ApiError::Transport(_) => LoginError::from_transport(&err),
    })?;
    let token = tokens
        .token()
        .ok_or(LoginError::MissingToken)?
        .to_string();
    debug!("login accepted, fetching profile");

    let user = client.me(&token).await.map_err(|err| match err {
        ApiError::Status { status, .. } => {
            warn!(status = status.as_u16(), "profile request failed after login");
            LoginError::ProfileUnavailable
        }
        ApiError::Transport(_) => LoginError::from_transport(&err),
    })?;

    session.login(token, user.clone());
    Ok(user)
}
