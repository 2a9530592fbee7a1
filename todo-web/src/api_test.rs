//! Tests for the API client functionality
//!
//! Validates request shapes, bearer authentication and the mapping of
//! failed responses onto `ApiError`.

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::api::{ApiError, TodoClient};
    use reqwest::StatusCode;
    use serde_json::json;
    use shared::models::{LoginRequest, Todo, TodoPayload};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Tests a trailing slash on the base URL is tolerated
    #[tokio::test]
    async fn test_base_url_trailing_slash() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"todos": [], "total": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let client = TodoClient::new(&format!("{}/", server.uri()));
        let response = client.list_todos("tok").await.unwrap();
        assert!(response.todos.is_empty());
        assert_eq!(response.total, 0);
    }

    /// Tests login posts the credential pair without authentication
    #[tokio::test]
    async fn test_login_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok1", "token_type": "bearer"})),
            )
            .mount(&server)
            .await;

        let client = TodoClient::new(&server.uri());
        let response = client
            .login(&LoginRequest {
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.token(), Some("tok1"));
    }

    /// Tests authenticated calls carry the bearer header
    #[tokio::test]
    async fn test_me_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer tok1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"username": "a", "email": "a@b.com"})),
            )
            .mount(&server)
            .await;

        let profile = TodoClient::new(&server.uri()).me("tok1").await.unwrap();
        assert_eq!(profile.email, "a@b.com");
    }

    /// Tests create and update round through the server representation
    #[tokio::test]
    async fn test_create_and_update_todo() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/todos"))
            .and(body_json(json!({"text": "a"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "text": "a"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/todos/1"))
            .and(body_json(json!({"text": "b"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "text": "b"})))
            .mount(&server)
            .await;

        let client = TodoClient::new(&server.uri());
        let created = client
            .create_todo("tok", &TodoPayload::text("a").unwrap())
            .await
            .unwrap();
        assert_eq!(
            created,
            Todo {
                id: 1,
                text: "a".to_string(),
                completed: None
            }
        );

        let updated = client
            .update_todo("tok", 1, &TodoPayload::text("b").unwrap())
            .await
            .unwrap();
        assert_eq!(updated.text, "b");
    }

    /// Tests delete ignores whatever body the server sends
    #[tokio::test]
    async fn test_delete_ignores_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/todos/3"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        TodoClient::new(&server.uri())
            .delete_todo("tok", 3)
            .await
            .unwrap();
    }

    /// Tests error bodies become the error message
    #[tokio::test]
    async fn test_error_body_message() {
        let server = MockServer::start().await;
        Mock::given(path("/todos/9"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Todo with id 9 not found"})),
            )
            .mount(&server)
            .await;

        let err = TodoClient::new(&server.uri())
            .delete_todo("tok", 9)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Todo with id 9 not found");
    }

    /// Tests the generic message when the body has none
    #[tokio::test]
    async fn test_error_without_body() {
        let server = MockServer::start().await;
        Mock::given(path("/todos"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = TodoClient::new(&server.uri())
            .list_todos("tok")
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(matches!(err, ApiError::Status { .. }));
        assert_eq!(err.to_string(), "Request failed: 401");
    }

    /// Tests transport failures are not mistaken for HTTP statuses
    #[tokio::test]
    async fn test_transport_error() {
        let err = TodoClient::new("http://127.0.0.1:1")
            .list_todos("tok")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }
}
