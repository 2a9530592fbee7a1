use crate::containers::header::Header;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <Header />
            <main class="flex-grow w-full max-w-4xl mx-auto p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{ "Todo List · Powered by Rust and Yew" }</p>
            </footer>
        </div>
    }
}
