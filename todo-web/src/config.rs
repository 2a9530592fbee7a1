//! Frontend configuration module
//!
//! Settings are fixed when the bundle is built; `option_env!` picks up
//! overrides from the build environment.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Frontend configuration for the backend location and browser storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the todo backend
    pub api_base_url: String,
    /// Local storage key holding the session token
    pub token_storage_key: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TODO_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            token_storage_key: option_env!("TODO_TOKEN_STORAGE_KEY")
                .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the storage key for the session token
    pub fn token_storage_key(&self) -> &str {
        &self.token_storage_key
    }
}
