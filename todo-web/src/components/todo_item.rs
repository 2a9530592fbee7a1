use shared::models::Todo;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub todo: Todo,
    /// Unsaved text when this todo is the one being edited.
    #[prop_or_default]
    pub edit_text: Option<String>,
    #[prop_or_default]
    pub submitting: bool,
    pub on_start_edit: Callback<Todo>,
    pub on_edit_input: Callback<String>,
    pub on_save: Callback<(i64, String)>,
    pub on_cancel: Callback<()>,
    pub on_toggle: Callback<Todo>,
    pub on_delete: Callback<i64>,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let todo = props.todo.clone();

    if let Some(edit_text) = props.edit_text.clone() {
        let onsubmit = {
            let on_save = props.on_save.clone();
            let text = edit_text.clone();
            let id = todo.id;
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                on_save.emit((id, text.clone()));
            })
        };
        let oninput = {
            let on_edit_input = props.on_edit_input.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    on_edit_input.emit(input.value());
                }
            })
        };
        let oncancel = props.on_cancel.reform(|_: MouseEvent| ());
        let busy = props.submitting;
        let blank = edit_text.trim().is_empty();

        return html! {
            <li class="p-4">
                <form class="flex gap-3 items-center" {onsubmit}>
                    <input
                        class="input input-bordered flex-1"
                        type="text"
                        value={edit_text}
                        {oninput}
                        disabled={busy}
                        autofocus=true
                    />
                    <button class="btn btn-primary btn-sm" type="submit" disabled={busy || blank}>
                        { if busy { "Saving..." } else { "Save" } }
                    </button>
                    <button class="btn btn-outline btn-sm" type="button" onclick={oncancel} disabled={busy}>
                        { "Cancel" }
                    </button>
                </form>
            </li>
        };
    }

    let onedit = {
        let on_start_edit = props.on_start_edit.clone();
        let todo = todo.clone();
        Callback::from(move |_: MouseEvent| on_start_edit.emit(todo.clone()))
    };
    let ondelete = {
        let on_delete = props.on_delete.clone();
        let id = todo.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };
    let ontoggle = {
        let on_toggle = props.on_toggle.clone();
        let todo = todo.clone();
        Callback::from(move |_: Event| on_toggle.emit(todo.clone()))
    };

    html! {
        <li class="p-4 flex justify-between items-center hover:bg-base-200">
            <label class="flex flex-1 items-center gap-3 cursor-pointer">
                if let Some(completed) = todo.completed {
                    <input
                        type="checkbox"
                        class="checkbox checkbox-primary"
                        checked={completed}
                        onchange={ontoggle}
                        disabled={props.submitting}
                    />
                }
                <div>
                    <p class={classes!(todo.is_completed().then_some("line-through opacity-60"))}>
                        { &todo.text }
                    </p>
                    <p class="text-xs text-base-content/60">{ format!("ID: {}", todo.id) }</p>
                </div>
            </label>
            <div class="flex gap-2">
                <button class="btn btn-outline btn-sm" onclick={onedit}>{ "Edit" }</button>
                <button class="btn btn-outline btn-error btn-sm" onclick={ondelete}>{ "Delete" }</button>
            </div>
        </li>
    }
}
