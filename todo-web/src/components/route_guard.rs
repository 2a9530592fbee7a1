use crate::components::loading::Loading;
use crate::session::Session;
use yew::{Children, Html, Properties, function_component, html};
use yewdux::prelude::use_selector;

/// What the guard renders for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup verification still running; no redirect decision yet.
    Pending,
    Admit,
    Deny,
}

impl GuardDecision {
    pub fn for_session(session: &Session) -> Self {
        if session.loading() {
            Self::Pending
        } else if session.is_authenticated() {
            Self::Admit
        } else {
            Self::Deny
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Renders its children only for an authenticated session.
///
/// Denied visitors get nothing; redirecting them is the router's job.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let decision = use_selector(GuardDecision::for_session);

    match *decision {
        GuardDecision::Pending => html! { <Loading /> },
        GuardDecision::Admit => html! { <>{ props.children.clone() }</> },
        GuardDecision::Deny => html! {},
    }
}
