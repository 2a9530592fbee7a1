use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Body of a successful `/auth/login` response.
///
/// Both fields are optional on the wire: a backend that answers 200 without
/// an `access_token` is reported to the user rather than failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Token scheme, `bearer` in practice.
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// The access token, if the backend sent a non-empty one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}
