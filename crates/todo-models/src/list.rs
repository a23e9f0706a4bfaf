//! Todo list type and its derived helpers.

use serde::{Deserialize, Serialize};

use crate::todo::Todo;

/// CSS class applied to complete lists and done todos.
pub const COMPLETE_CLASS: &str = "complete";

/// A named, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    /// Display name, unique among the session's lists.
    pub name: String,

    /// Todos in insertion order.
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates a new empty list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Number of todos not yet completed.
    pub fn unfinished_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Total number of todos.
    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    /// A list is complete when it has at least one todo and none are open.
    ///
    /// An empty list is never complete.
    pub fn is_complete(&self) -> bool {
        self.unfinished_count() == 0 && !self.todos.is_empty()
    }

    /// CSS class for rendering, if any.
    pub fn list_class(&self) -> Option<&'static str> {
        self.is_complete().then_some(COMPLETE_CLASS)
    }

    /// Marks every todo as completed.
    pub fn complete_all(&mut self) {
        for todo in &mut self.todos {
            todo.completed = true;
        }
    }
}
