//! Tests for the sign-in flow
//!
//! Drives `auth::sign_in` against a mocked backend and checks what ends up
//! in the session store and durable storage.

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::api::TodoClient;
    use crate::auth::{LoginError, sign_in};
    use crate::host::fake::FakeHost;
    use crate::session::{Session, SessionStore};
    use serde_json::json;
    use std::rc::Rc;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use yewdux::{Context, Dispatch};

    fn session_store(host: &Rc<FakeHost>) -> SessionStore {
        let cx = Context::new();
        SessionStore::new(Dispatch::<Session>::new(&cx), host.clone())
    }

    async fn mount_login(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    /// Blank fields fail before any request is made
    #[tokio::test]
    async fn test_blank_fields_never_hit_the_network() {
        let server = MockServer::start().await;
        Mock::given(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let client = TodoClient::new(&server.uri());

        for (email, password) in [("", "pw"), ("a@b.com", "   "), ("  ", "")] {
            let result = sign_in(&client, &store, email, password).await;
            assert_eq!(result, Err(LoginError::Validation));
        }
        assert_eq!(host.stored_token_value(), None);
    }

    /// Full happy path: token, profile, session and storage
    #[tokio::test]
    async fn test_successful_login_persists_token_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok1", "token_type": "bearer"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer tok1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"username": "a", "email": "a@b.com"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let user = sign_in(&TodoClient::new(&server.uri()), &store, "a@b.com", "pw")
            .await
            .unwrap();

        assert_eq!(user.username, "a");
        assert_eq!(host.stored_token_value().as_deref(), Some("tok1"));
        assert!(store.session().is_authenticated());
        assert_eq!(host.navigations.get(), 0);
    }

    /// The backend's `detail` text is shown verbatim
    #[tokio::test]
    async fn test_rejected_login_uses_body_message() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .await;

        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let result = sign_in(&TodoClient::new(&server.uri()), &store, "a@b.com", "bad").await;

        assert_eq!(
            result,
            Err(LoginError::Rejected("Incorrect email or password".to_string()))
        );
        assert!(!store.session().is_authenticated());
    }

    /// Without a usable body the status code is reported
    #[tokio::test]
    async fn test_rejected_login_without_body() {
        let server = MockServer::start().await;
        mount_login(&server, ResponseTemplate::new(500).set_body_string("oops")).await;

        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let err = sign_in(&TodoClient::new(&server.uri()), &store, "a@b.com", "pw")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Request failed: 500");
    }

    /// A 200 without `access_token` is an error
    #[tokio::test]
    async fn test_login_without_token() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"token_type": "bearer"})),
        )
        .await;
        Mock::given(path("/auth/me"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let result = sign_in(&TodoClient::new(&server.uri()), &store, "a@b.com", "pw").await;

        assert_eq!(result, Err(LoginError::MissingToken));
        assert_eq!(host.stored_token_value(), None);
    }

    /// A failed profile fetch discards the freshly issued token
    #[tokio::test]
    async fn test_profile_failure_discards_token() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok1"})),
        )
        .await;
        Mock::given(path("/auth/me"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let result = sign_in(&TodoClient::new(&server.uri()), &store, "a@b.com", "pw").await;

        assert_eq!(result, Err(LoginError::ProfileUnavailable));
        assert_eq!(host.stored_token_value(), None);
        assert!(!store.session().is_authenticated());
    }

    /// Transport failures carry the client's error text
    #[tokio::test]
    async fn test_unreachable_backend() {
        let host = Rc::new(FakeHost::default());
        let store = session_store(&host);
        let result = sign_in(&TodoClient::new("http://127.0.0.1:1"), &store, "a@b.com", "pw").await;

        match result {
            Err(LoginError::Network(message)) => assert!(!message.is_empty()),
            other => panic!("expected a network error, got {other:?}"),
        }
    }
}
