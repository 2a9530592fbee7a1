//! Backend operations of the todo list page.
//!
//! Each operation follows the same shape: send the request with the session
//! token, branch on the outcome, and report the result as a [`TodoAction`].
//! A 401 anywhere tears the session down instead of showing an error.

use crate::api::{ApiError, TodoClient};
use crate::models::todo_list::TodoAction;
use crate::session::SessionStore;
use shared::models::{Todo, TodoPayload};
use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use tracing::{debug, info, warn};
use yew::Callback;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this todo?";
const COMPLETION_UNSUPPORTED: &str = "Failed to update todo: completion is not supported by the server";

/// Three-way result of an authenticated call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    /// The backend rejected the token, or there was none.
    Expired,
    /// Anything else, already phrased for the error banner.
    Failed(String),
}

impl<T> Outcome<T> {
    /// Classify a backend result; `operation` names it in error text,
    /// e.g. `"fetch todos"`.
    pub fn from_result(result: Result<T, ApiError>, operation: &str) -> Self {
        match result {
            Ok(value) => Self::Done(value),
            Err(err) if err.is_unauthorized() => Self::Expired,
            Err(ApiError::Status { status, .. }) => {
                Self::Failed(format!("Failed to {operation}: {}", status.as_u16()))
            }
            Err(err @ ApiError::Transport(_)) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    Self::Failed(format!("Failed to {operation}"))
                } else {
                    Self::Failed(message)
                }
            }
        }
    }
}

/// Runs todo operations for one mounted list page.
///
/// Cheap to clone; every clone shares the request sequence counter.
#[derive(Clone)]
pub struct TodoController {
    client: TodoClient,
    session: SessionStore,
    dispatch: Callback<TodoAction>,
    seq: Rc<Cell<u64>>,
}

impl TodoController {
    pub fn new(client: TodoClient, session: SessionStore, dispatch: Callback<TodoAction>) -> Self {
        Self {
            client,
            session,
            dispatch,
            seq: Rc::new(Cell::new(0)),
        }
    }

    fn next_seq(&self) -> u64 {
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        seq
    }

    /// Send an authenticated request, logging out on expiry.
    async fn authorized<T, F, Fut>(&self, operation: &str, call: F) -> Option<Result<T, String>>
    where
        F: FnOnce(TodoClient, String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let outcome = match self.session.token() {
            Some(token) => Outcome::from_result(call(self.client.clone(), token).await, operation),
            None => Outcome::Expired,
        };
        match outcome {
            Outcome::Done(value) => Some(Ok(value)),
            Outcome::Failed(message) => Some(Err(message)),
            Outcome::Expired => {
                info!(operation, "session expired");
                self.dispatch.emit(TodoAction::SessionExpired);
                self.session.logout();
                None
            }
        }
    }

    /// Reload the whole list from the backend.
    pub async fn fetch(&self) {
        let seq = self.next_seq();
        debug!(seq, "fetching todos");
        self.dispatch.emit(TodoAction::FetchStarted { seq });
        let result = self
            .authorized("fetch todos", |client, token| async move {
                client.list_todos(&token).await
            })
            .await;
        match result {
            Some(Ok(response)) => self.dispatch.emit(TodoAction::FetchSucceeded {
                seq,
                todos: response.todos,
            }),
            Some(Err(message)) => self.dispatch.emit(TodoAction::FetchFailed { seq, message }),
            None => {}
        }
    }

    /// Create a todo from `text`; blank text is ignored.
    pub async fn add(&self, text: &str) {
        let Some(payload) = TodoPayload::text(text) else {
            return;
        };
        self.dispatch.emit(TodoAction::MutationStarted);
        let result = self
            .authorized("add todo", |client, token| async move {
                client.create_todo(&token, &payload).await
            })
            .await;
        match result {
            Some(Ok(todo)) => self.dispatch.emit(TodoAction::Added(todo)),
            Some(Err(message)) => self.dispatch.emit(TodoAction::MutationFailed(message)),
            None => {}
        }
    }

    /// Replace the text of todo `id`; blank text is ignored.
    pub async fn update(&self, id: i64, text: &str) {
        let Some(payload) = TodoPayload::text(text) else {
            return;
        };
        self.save(id, payload).await;
    }

    /// Flip the completion flag of `todo`.
    pub async fn toggle(&self, todo: &Todo) {
        self.save(todo.id, TodoPayload::toggled(todo)).await;
    }

    async fn save(&self, id: i64, payload: TodoPayload) {
        let seq = self.next_seq();
        let requested = payload.completed;
        self.dispatch.emit(TodoAction::UpdateStarted { id, seq });
        let result = self
            .authorized("update todo", |client, token| async move {
                client.update_todo(&token, id, &payload).await
            })
            .await;
        match result {
            // The backend dropped the flag, so the toggle never happened.
            Some(Ok(todo)) if requested.is_some() && todo.completed != requested => {
                warn!(id, "update response did not confirm the completion flag");
                self.dispatch.emit(TodoAction::UpdateFailed {
                    id,
                    seq,
                    message: COMPLETION_UNSUPPORTED.to_string(),
                });
            }
            Some(Ok(todo)) => self.dispatch.emit(TodoAction::Updated { seq, todo }),
            Some(Err(message)) => {
                self.dispatch
                    .emit(TodoAction::UpdateFailed { id, seq, message });
            }
            None => {}
        }
    }

    /// Delete todo `id` after the user confirms.
    pub async fn delete(&self, id: i64) {
        if !self.session.host().confirm(DELETE_CONFIRMATION) {
            debug!(id, "delete cancelled");
            return;
        }
        self.dispatch.emit(TodoAction::MutationStarted);
        let result = self
            .authorized("delete todo", |client, token| async move {
                client.delete_todo(&token, id).await
            })
            .await;
        match result {
            Some(Ok(())) => self.dispatch.emit(TodoAction::Removed(id)),
            Some(Err(message)) => self.dispatch.emit(TodoAction::MutationFailed(message)),
            None => {}
        }
    }
}

impl PartialEq for TodoController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.seq, &other.seq)
    }
}

impl fmt::Debug for TodoController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoController")
            .field("seq", &self.seq.get())
            .finish_non_exhaustive()
    }
}
