//! Todo item type.

use serde::{Deserialize, Serialize};

/// A named item with a completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Display name, already trimmed and validated.
    pub name: String,

    /// Whether the todo is done.
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }

    /// Sets the completion flag. Transitions are unrestricted.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
