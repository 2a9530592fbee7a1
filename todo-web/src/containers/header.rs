use crate::session::{Session, SessionStore};
use tracing::error;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Application bar with the signed-in user and the logout control.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_context::<SessionStore>();
    let email = use_selector(|state: &Session| state.user().map(|user| user.email.clone()));

    let on_logout = Callback::from(move |_: MouseEvent| match &session {
        Some(session) => session.logout(),
        None => error!("logout requested without a session store"),
    });

    html! {
        <nav class="navbar justify-between bg-base-300 px-6">
            <h1 class="text-2xl font-bold">{ "Todo List" }</h1>
            <div class="flex items-center gap-4">
                if let Some(email) = (*email).clone() {
                    <span class="text-sm text-base-content/80">{ format!("Welcome, {email}") }</span>
                }
                <button class="btn btn-error btn-sm" onclick={on_logout}>{ "Logout" }</button>
            </div>
        </nav>
    }
}
