use crate::components::RouteGuard;
use crate::containers::layout::Layout;
use crate::pages::{LoginPage, NotFoundPage, TodoListPage};
use crate::session::Session;
use strum::EnumIter;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/todos")]
    Todos,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Where to send a visitor of this route instead, if anywhere.
    ///
    /// Nothing is redirected while the startup verification is pending.
    pub fn redirect_for(&self, session: &Session) -> Option<MainRoute> {
        match self {
            MainRoute::Home => Some(MainRoute::Todos),
            MainRoute::Login if session.is_authenticated() => Some(MainRoute::Todos),
            MainRoute::Todos if !session.loading() && !session.is_authenticated() => {
                Some(MainRoute::Login)
            }
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_store_value::<Session>();

    if let Some(target) = props.route.redirect_for(&session) {
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    match props.route {
        // Always redirected above.
        MainRoute::Home => html! {},
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Todos => html! {
            <RouteGuard>
                <Layout>
                    <TodoListPage />
                </Layout>
            </RouteGuard>
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    debug!(?route, "switching route");
    html! { <MainRouteView {route} /> }
}
