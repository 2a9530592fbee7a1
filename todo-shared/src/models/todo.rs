use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Server-assigned identifier, unique per item.
    pub id: i64,

    /// Free-text content, never blank.
    pub text: String,

    /// Completion flag, `None` when the backend does not track completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Todo {
    /// Whether the backend reported this todo as done.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed == Some(true)
    }
}

/// Body of `GET /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodosResponse {
    /// All todos visible to the caller, in server order.
    pub todos: Vec<Todo>,

    /// Number of todos on the server.
    #[serde(default)]
    pub total: u64,
}

/// Body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPayload {
    /// Trimmed todo text.
    pub text: String,

    /// New completion state; left out of the JSON when unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPayload {
    /// Build a text-only payload, trimming the input.
    ///
    /// Returns `None` when the text is blank after trimming.
    #[must_use]
    pub fn text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            completed: None,
        })
    }

    /// Payload flipping the completion flag of `todo`, keeping its text.
    #[must_use]
    pub fn toggled(todo: &Todo) -> Self {
        Self {
            text: todo.text.clone(),
            completed: Some(!todo.is_completed()),
        }
    }
}

/// Which todos the list view shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TodoFilter {
    /// Every todo.
    #[default]
    All,
    /// Only completed todos.
    Completed,
    /// Only todos still open.
    NotCompleted,
}

impl TodoFilter {
    /// Whether `todo` passes this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Completed => matches!(todo.completed, Some(true)),
            Self::NotCompleted => !matches!(todo.completed, Some(true)),
        }
    }

    /// Human readable label for the filter selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All todos",
            Self::Completed => "Completed",
            Self::NotCompleted => "Not Completed",
        }
    }
}
