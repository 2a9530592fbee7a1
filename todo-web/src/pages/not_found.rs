use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-4xl font-bold">{ "404" }</h1>
            <p class="text-base-content/70">{ "The page you are looking for does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Todos} classes="btn btn-primary">
                { "Back to your todos" }
            </Link<MainRoute>>
        </div>
    }
}
