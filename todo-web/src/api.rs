use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    LoginRequest, Todo, TodoPayload, TodosResponse, TokenResponse, UserProfile,
    extract_error_message, request_failed_message,
};
use thiserror::Error;
use tracing::debug;

thread_local! {
    static SHARED_CLIENT: OnceCell<TodoClient> = OnceCell::new();
}

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    ///
    /// `message` is taken from the error body when it has one, otherwise it
    /// reads `Request failed: <status>`.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }

    /// Whether the backend refused the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Lightweight API client for the todo backend.
#[derive(Clone, Debug)]
pub struct TodoClient {
    base_url: String,
    client: Client,
}

impl TodoClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Per-thread client pointed at the configured backend.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| request_failed_message(status.as_u16()));
        debug!(status = status.as_u16(), %message, "request rejected");
        Err(ApiError::Status { status, message })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Exchange credentials for an access token.
    pub async fn login(&self, payload: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let url = self.api_url("auth/login");
        debug!(%url, "logging in");
        self.send_json(self.client.post(url).json(payload)).await
    }

    /// Retrieve the profile the token belongs to.
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.api_url("auth/me");
        self.send_json(self.client.get(url).bearer_auth(token)).await
    }

    /// List every todo.
    pub async fn list_todos(&self, token: &str) -> Result<TodosResponse, ApiError> {
        let url = self.api_url("todos");
        self.send_json(self.client.get(url).bearer_auth(token)).await
    }

    /// Create a todo; the server assigns its id.
    pub async fn create_todo(&self, token: &str, payload: &TodoPayload) -> Result<Todo, ApiError> {
        let url = self.api_url("todos");
        self.send_json(self.client.post(url).bearer_auth(token).json(payload))
            .await
    }

    /// Replace the text (and optionally the completion flag) of a todo.
    pub async fn update_todo(
        &self,
        token: &str,
        id: i64,
        payload: &TodoPayload,
    ) -> Result<Todo, ApiError> {
        let url = self.api_url(&format!("todos/{id}"));
        self.send_json(self.client.put(url).bearer_auth(token).json(payload))
            .await
    }

    /// Delete a todo. The response body is ignored.
    pub async fn delete_todo(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("todos/{id}"));
        self.send(self.client.delete(url).bearer_auth(token)).await?;
        Ok(())
    }
}
