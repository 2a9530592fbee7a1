use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewTodoFormProps {
    pub draft: String,
    #[prop_or_default]
    pub submitting: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<String>,
}

#[function_component(NewTodoForm)]
pub fn new_todo_form(props: &NewTodoFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let draft = props.draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(draft.clone());
        })
    };
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    let busy = props.submitting;
    let blank = props.draft.trim().is_empty();

    html! {
        <div class="card bg-base-100 shadow-sm p-6 mb-6">
            <h2 class="text-lg font-semibold mb-4">{ "Add New Todo" }</h2>
            <form class="flex gap-3" {onsubmit}>
                <input
                    class="input input-bordered flex-1"
                    type="text"
                    placeholder="Enter todo text..."
                    value={props.draft.clone()}
                    {oninput}
                    disabled={busy}
                />
                <button class="btn btn-primary" type="submit" disabled={busy || blank}>
                    { if busy { "Adding..." } else { "Add Todo" } }
                </button>
            </form>
        </div>
    }
}
