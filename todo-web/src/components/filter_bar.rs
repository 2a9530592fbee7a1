use shared::models::TodoFilter;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: TodoFilter,
    pub visible: usize,
    pub total: usize,
    /// Offer the completion filter; off when the backend has no such flag.
    #[prop_or(true)]
    pub show_filter: bool,
    pub on_change: Callback<TodoFilter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            match TodoFilter::from_str(&select.value()) {
                Ok(filter) => on_change.emit(filter),
                Err(err) => tracing::warn!(value = %select.value(), %err, "unknown filter"),
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow-sm p-6 mb-6">
            <div class="flex items-center gap-4">
                if props.show_filter {
                    <label for="filter" class="text-sm font-medium">{ "Filter:" }</label>
                    <select id="filter" class="select select-bordered w-48" {onchange}>
                        { for TodoFilter::iter().map(|filter| html! {
                            <option value={filter.to_string()} selected={filter == props.filter}>
                                { filter.label() }
                            </option>
                        }) }
                    </select>
                }
                <span class="text-sm text-base-content/60">
                    { format!("Showing {} of {} todos", props.visible, props.total) }
                </span>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(CompletedOnly)]
    fn completed_only() -> Html {
        html! {
            <FilterBar
                filter={TodoFilter::Completed}
                visible={1}
                total={3}
                on_change={Callback::noop()}
            />
        }
    }

    #[function_component(CountOnly)]
    fn count_only() -> Html {
        html! {
            <FilterBar
                filter={TodoFilter::All}
                visible={2}
                total={2}
                show_filter={false}
                on_change={Callback::noop()}
            />
        }
    }

    #[wasm_bindgen_test]
    async fn test_filter_hidden_without_completion() {
        let rendered = yew::ServerRenderer::<CountOnly>::new().render().await;
        assert!(rendered.contains("Showing 2 of 2 todos"));
        assert!(!rendered.contains("not-completed"));
    }

    #[wasm_bindgen_test]
    async fn test_filter_bar_counts_and_options() {
        let rendered = yew::ServerRenderer::<CompletedOnly>::new().render().await;
        assert!(rendered.contains("Showing 1 of 3 todos"));
        assert!(rendered.contains("All todos"));
        assert!(rendered.contains("Not Completed"));
        assert!(rendered.contains("value=\"not-completed\""));
    }
}
