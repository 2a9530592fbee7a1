use shared::models::{Todo, TodoFilter};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

/// The todo currently being edited and its unsaved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: i64,
    pub text: String,
}

/// View-model of the todo list page.
///
/// Always updated through [`TodoAction`]s so that a response is applied to
/// whatever the list looks like when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub draft: String,
    pub editing: Option<EditState>,
    pub filter: TodoFilter,
    pub loading: bool,
    pub error: Option<String>,
    in_flight: usize,
    fetch_seq: u64,
    update_seq: HashMap<i64, u64>,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
            editing: None,
            filter: TodoFilter::All,
            loading: true,
            error: None,
            in_flight: 0,
            fetch_seq: 0,
            update_seq: HashMap::new(),
        }
    }
}

impl TodoListState {
    /// True while any add, update or delete is waiting on the backend.
    pub fn submitting(&self) -> bool {
        self.in_flight > 0
    }

    /// Whether the backend reports completion for any loaded todo.
    ///
    /// The completion filter and checkboxes are only offered when it does.
    pub fn tracks_completion(&self) -> bool {
        self.todos.iter().any(|todo| todo.completed.is_some())
    }

    /// Todos passing the current filter, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &Todo> {
        let filter = if self.tracks_completion() {
            self.filter
        } else {
            TodoFilter::All
        };
        self.todos.iter().filter(move |todo| filter.matches(todo))
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    fn settle_mutation(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Everything that changes the todo list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// A fetch tagged `seq` was sent; older fetch responses become stale.
    FetchStarted { seq: u64 },
    FetchSucceeded { seq: u64, todos: Vec<Todo> },
    FetchFailed { seq: u64, message: String },
    /// An add or delete was sent.
    MutationStarted,
    Added(Todo),
    Removed(i64),
    /// An update of `id` tagged `seq` was sent.
    UpdateStarted { id: i64, seq: u64 },
    /// Server representation after the update tagged `seq`.
    Updated { seq: u64, todo: Todo },
    /// The update of `id` tagged `seq` failed.
    UpdateFailed { id: i64, seq: u64, message: String },
    /// An add or delete failed.
    MutationFailed(String),
    /// Any request hit a 401; the session is being torn down.
    SessionExpired,
    SetDraft(String),
    StartEdit { id: i64, text: String },
    SetEditText(String),
    CancelEdit,
    SetFilter(TodoFilter),
    DismissError,
}

impl Reducible for TodoListState {
    type Action = TodoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TodoAction::FetchStarted { seq } => {
                next.fetch_seq = seq;
                next.loading = true;
            }
            TodoAction::FetchSucceeded { seq, todos } => {
                if seq != next.fetch_seq {
                    return self;
                }
                next.todos = todos;
                next.loading = false;
                next.error = None;
            }
            TodoAction::FetchFailed { seq, message } => {
                if seq != next.fetch_seq {
                    return self;
                }
                next.loading = false;
                next.error = Some(message);
            }
            TodoAction::MutationStarted => next.in_flight += 1,
            TodoAction::Added(todo) => {
                next.settle_mutation();
                next.todos.push(todo);
                next.draft.clear();
                next.error = None;
            }
            TodoAction::Removed(id) => {
                next.settle_mutation();
                next.todos.retain(|todo| todo.id != id);
                next.update_seq.remove(&id);
                if next.is_editing(id) {
                    next.editing = None;
                }
                next.error = None;
            }
            TodoAction::UpdateStarted { id, seq } => {
                next.in_flight += 1;
                next.update_seq.insert(id, seq);
            }
            TodoAction::Updated { seq, todo } => {
                next.settle_mutation();
                if next.update_seq.get(&todo.id) != Some(&seq) {
                    return Rc::new(next);
                }
                next.update_seq.remove(&todo.id);
                if next.is_editing(todo.id) {
                    next.editing = None;
                }
                if let Some(slot) = next.todos.iter_mut().find(|item| item.id == todo.id) {
                    *slot = todo;
                }
                next.error = None;
            }
            TodoAction::UpdateFailed { id, seq, message } => {
                next.settle_mutation();
                if next.update_seq.get(&id) != Some(&seq) {
                    return Rc::new(next);
                }
                next.update_seq.remove(&id);
                next.error = Some(message);
            }
            TodoAction::MutationFailed(message) => {
                next.settle_mutation();
                next.error = Some(message);
            }
            TodoAction::SessionExpired => {
                next.loading = false;
                next.in_flight = 0;
            }
            TodoAction::SetDraft(text) => next.draft = text,
            TodoAction::StartEdit { id, text } => next.editing = Some(EditState { id, text }),
            TodoAction::SetEditText(text) => {
                if let Some(edit) = next.editing.as_mut() {
                    edit.text = text;
                }
            }
            TodoAction::CancelEdit => next.editing = None,
            TodoAction::SetFilter(filter) => next.filter = filter,
            TodoAction::DismissError => next.error = None,
        }
        Rc::new(next)
    }
}
