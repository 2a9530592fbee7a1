//! Browser client for the todo service.

mod api;
mod app;
mod auth;
mod components;
mod config;
mod containers;
mod host;
mod logging;
mod models;
mod pages;
mod routes;
mod session;
mod todo_actions;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod auth_test;
#[cfg(test)]
mod routes_test;

use app::App;
use tracing::{error, info};
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    logging::install_panic_hook();
    logging::init();
    info!("starting todo client");

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => {
            Renderer::<Root>::with_root(body.into()).render();
        }
        None => error!("no document body to mount the application on"),
    }
}
