use crate::api::TodoClient;
use crate::host::WebHost;
use crate::routes::{MainRoute, switch};
use crate::session::{Session, SessionStore};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

/// Owns the session store and verifies any stored token once at startup.
#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<Session>();
    let store = use_memo((), move |_| {
        SessionStore::new(dispatch, Rc::new(WebHost::default()))
    });

    {
        let store = (*store).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                store.restore(&TodoClient::shared()).await;
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionStore> context={(*store).clone()}>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionStore>>
    }
}
