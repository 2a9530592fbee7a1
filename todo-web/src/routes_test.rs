//! Tests for the routing system
//!
//! Validates route paths, recognition of unknown URLs and the redirects
//! applied for each session state.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use crate::session::{Session, SessionAction};
    use shared::models::UserProfile;
    use strum::IntoEnumIterator;
    use test_case::test_case;
    use yew_router::Routable;
    use yewdux::Reducer;

    fn session(actions: Vec<SessionAction>) -> Session {
        let state = actions
            .into_iter()
            .fold(std::rc::Rc::new(Session::default()), |state, action| {
                action.apply(state)
            });
        (*state).clone()
    }

    fn signed_in() -> Session {
        session(vec![SessionAction::LogIn {
            token: "tok1".to_string(),
            user: UserProfile {
                username: "a".to_string(),
                email: "a@b.com".to_string(),
            },
        }])
    }

    fn signed_out() -> Session {
        session(vec![SessionAction::Restore(None)])
    }

    /// Tests every route renders to its path
    #[test_case(MainRoute::Home, "/")]
    #[test_case(MainRoute::Login, "/login")]
    #[test_case(MainRoute::Todos, "/todos")]
    #[test_case(MainRoute::NotFound, "/404")]
    fn test_route_paths(route: MainRoute, path: &str) {
        assert_eq!(route.to_path(), path);
        assert_eq!(MainRoute::recognize(path), Some(route));
    }

    /// Tests unknown URLs fall back to the not found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(MainRoute::recognize("/nope"), Some(MainRoute::NotFound));
    }

    /// Tests the root always lands on the list
    #[test]
    fn test_home_redirects_to_todos() {
        for state in [Session::default(), signed_out(), signed_in()] {
            assert_eq!(MainRoute::Home.redirect_for(&state), Some(MainRoute::Todos));
        }
    }

    /// Tests the list waits for verification before redirecting
    #[test]
    fn test_todos_redirect() {
        assert_eq!(MainRoute::Todos.redirect_for(&Session::default()), None);
        assert_eq!(
            MainRoute::Todos.redirect_for(&signed_out()),
            Some(MainRoute::Login)
        );
        assert_eq!(MainRoute::Todos.redirect_for(&signed_in()), None);
    }

    /// Tests signed-in visitors skip the login form
    #[test]
    fn test_login_redirect() {
        assert_eq!(MainRoute::Login.redirect_for(&signed_out()), None);
        assert_eq!(
            MainRoute::Login.redirect_for(&signed_in()),
            Some(MainRoute::Todos)
        );
    }

    /// Tests the not found page is reachable in every state
    #[test]
    fn test_not_found_never_redirects() {
        for state in [Session::default(), signed_out(), signed_in()] {
            assert_eq!(MainRoute::NotFound.redirect_for(&state), None);
        }
        assert_eq!(MainRoute::iter().count(), 4);
    }
}
