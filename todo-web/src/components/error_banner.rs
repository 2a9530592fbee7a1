use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_retry: Callback<()>,
    pub on_dismiss: Callback<()>,
}

/// Inline, dismissible error with a manual retry.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let onretry = props.on_retry.reform(|_: MouseEvent| ());
    let ondismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div role="alert" class="alert alert-error mb-6">
            <span>{ props.message.clone() }</span>
            <div class="flex gap-2">
                <button class="btn btn-sm btn-outline" onclick={onretry}>{ "Retry" }</button>
                <button class="btn btn-sm btn-ghost" aria-label="Dismiss" onclick={ondismiss}>{ "✕" }</button>
            </div>
        </div>
    }
}
