//! The todo list page: list, draft form, inline editing and filtering.

use crate::api::TodoClient;
use crate::components::{ErrorBanner, FilterBar, Loading, NewTodoForm, TodoItem};
use crate::models::todo_list::{TodoAction, TodoListState};
use crate::session::{Session, SessionStore};
use crate::todo_actions::TodoController;
use shared::models::{Todo, TodoFilter};
use std::future::Future;
use std::rc::Rc;
use tracing::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Callback that runs a controller operation in the background.
fn operation<IN, F, Fut>(controller: &Rc<Option<TodoController>>, run: F) -> Callback<IN>
where
    IN: 'static,
    F: Fn(TodoController, IN) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let controller = Rc::clone(controller);
    Callback::from(move |input: IN| match &*controller {
        Some(controller) => spawn_local(run(controller.clone(), input)),
        None => error!("todo operation without a session store"),
    })
}

#[function_component(TodoListPage)]
pub fn todo_list_page() -> Html {
    let session = use_context::<SessionStore>();
    let state = use_reducer(TodoListState::default);
    let token = use_selector(|session: &Session| session.token().map(str::to_string));

    let controller = {
        let dispatcher = state.dispatcher();
        use_memo(session, move |session| {
            session.clone().map(|session| {
                let dispatch = Callback::from(move |action| dispatcher.dispatch(action));
                TodoController::new(TodoClient::shared(), session, dispatch)
            })
        })
    };

    // Refetch on mount and whenever the session token changes.
    {
        let controller = Rc::clone(&controller);
        use_effect_with((*token).clone(), move |token| {
            if token.is_some()
                && let Some(controller) = (*controller).clone()
            {
                spawn_local(async move { controller.fetch().await });
            }
            || ()
        });
    }

    let on_retry = operation(&controller, |controller, ()| async move {
        controller.fetch().await;
    });
    let on_add = operation(&controller, |controller, text: String| async move {
        controller.add(&text).await;
    });
    let on_save = operation(&controller, |controller, (id, text): (i64, String)| async move {
        controller.update(id, &text).await;
    });
    let on_toggle = operation(&controller, |controller, todo: Todo| async move {
        controller.toggle(&todo).await;
    });
    let on_delete = operation(&controller, |controller, id: i64| async move {
        controller.delete(id).await;
    });

    let dispatcher = state.dispatcher();
    let on_dismiss = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |()| dispatcher.dispatch(TodoAction::DismissError))
    };
    let on_draft = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |text| dispatcher.dispatch(TodoAction::SetDraft(text)))
    };
    let on_start_edit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |todo: Todo| {
            dispatcher.dispatch(TodoAction::StartEdit {
                id: todo.id,
                text: todo.text,
            });
        })
    };
    let on_edit_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |text| dispatcher.dispatch(TodoAction::SetEditText(text)))
    };
    let on_cancel = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |()| dispatcher.dispatch(TodoAction::CancelEdit))
    };
    let on_filter = Callback::from(move |filter: TodoFilter| {
        dispatcher.dispatch(TodoAction::SetFilter(filter));
    });

    if state.loading && state.todos.is_empty() {
        return html! { <Loading message="Loading todos..." /> };
    }

    let visible: Vec<Todo> = state.visible().cloned().collect();
    let submitting = state.submitting();

    html! {
        <>
            if let Some(message) = state.error.clone() {
                <ErrorBanner {message} {on_retry} {on_dismiss} />
            }
            <NewTodoForm
                draft={state.draft.clone()}
                {submitting}
                on_input={on_draft}
                on_submit={on_add}
            />
            <FilterBar
                filter={state.filter}
                visible={visible.len()}
                total={state.todos.len()}
                show_filter={state.tracks_completion()}
                on_change={on_filter}
            />
            <div class="card bg-base-100 shadow-sm">
                if visible.is_empty() {
                    <p class="p-6 text-center text-base-content/60">
                        { "No todos found. Add your first todo above!" }
                    </p>
                } else {
                    <ul class="divide-y divide-base-300">
                        { for visible.into_iter().map(|todo| {
                            let id = todo.id;
                            let edit_text = if state.is_editing(id) {
                                state.editing.as_ref().map(|edit| edit.text.clone())
                            } else {
                                None
                            };
                            html! {
                                <TodoItem
                                    key={id}
                                    {todo}
                                    {edit_text}
                                    {submitting}
                                    on_start_edit={on_start_edit.clone()}
                                    on_edit_input={on_edit_input.clone()}
                                    on_save={on_save.clone()}
                                    on_cancel={on_cancel.clone()}
                                    on_toggle={on_toggle.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            }
                        }) }
                    </ul>
                }
            </div>
        </>
    }
}
