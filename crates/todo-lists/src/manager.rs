//! ListManager - the lists owned by one session.
//!
//! Lists and todos are addressed by their current position. Removing an
//! entry shifts every later entry down by one, so positions are only
//! meaningful against the state they were read from.

use serde::{Deserialize, Serialize};
use todo_models::{Todo, TodoList};
use tracing::debug;

use crate::error::{ListError, Result};
use crate::validation::{validate_list_name, validate_todo_name};

/// Ordered sequence of lists belonging to one session.
///
/// A fresh manager holds no lists. Every operation that takes a position
/// fails with a not-found error instead of panicking when the position is
/// out of range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListManager {
    lists: Vec<TodoList>,
}

impl ListManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists in storage order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if there are no lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Names of every list, used for uniqueness checks.
    pub fn list_names(&self) -> Vec<&str> {
        self.lists.iter().map(|list| list.name.as_str()).collect()
    }

    /// Gets the list at `index`.
    pub fn list(&self, index: usize) -> Result<&TodoList> {
        self.lists.get(index).ok_or(ListError::ListNotFound(index))
    }

    fn list_mut(&mut self, index: usize) -> Result<&mut TodoList> {
        self.lists
            .get_mut(index)
            .ok_or(ListError::ListNotFound(index))
    }

    fn todo_mut(&mut self, list_index: usize, todo_index: usize) -> Result<&mut Todo> {
        self.list_mut(list_index)?
            .todos
            .get_mut(todo_index)
            .ok_or(ListError::TodoNotFound {
                list: list_index,
                todo: todo_index,
            })
    }

    /// Appends a new empty list.
    ///
    /// The name is trimmed before validation.
    pub fn create_list(&mut self, name: &str) -> Result<&TodoList> {
        let name = name.trim();
        validate_list_name(name, &self.list_names())?;

        self.lists.push(TodoList::new(name));
        debug!(list = %name, index = self.lists.len() - 1, "list created");
        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Renames the list at `index`.
    ///
    /// The name must differ from every current list name, including the
    /// list's own.
    pub fn rename_list(&mut self, index: usize, name: &str) -> Result<()> {
        self.list(index)?;
        let name = name.trim();
        validate_list_name(name, &self.list_names())?;

        let list = self.list_mut(index)?;
        debug!(from = %list.name, to = %name, index, "list renamed");
        list.name = name.to_string();
        Ok(())
    }

    /// Removes the list at `index`, shifting later lists down.
    pub fn delete_list(&mut self, index: usize) -> Result<TodoList> {
        self.list(index)?;
        let removed = self.lists.remove(index);
        debug!(list = %removed.name, index, "list deleted");
        Ok(removed)
    }

    /// Appends an open todo to the list at `list_index`.
    pub fn create_todo(&mut self, list_index: usize, name: &str) -> Result<&Todo> {
        let list = self.list_mut(list_index)?;
        let name = name.trim();
        validate_todo_name(name)?;

        list.todos.push(Todo::new(name));
        debug!(list = list_index, todo = %name, "todo added");
        Ok(&list.todos[list.todos.len() - 1])
    }

    /// Removes a todo, shifting later todos down.
    pub fn delete_todo(&mut self, list_index: usize, todo_index: usize) -> Result<Todo> {
        self.todo_mut(list_index, todo_index)?;
        let list = self.list_mut(list_index)?;
        let removed = list.todos.remove(todo_index);
        debug!(list = list_index, todo = todo_index, "todo deleted");
        Ok(removed)
    }

    /// Sets the completion flag of one todo.
    pub fn set_todo_completed(
        &mut self,
        list_index: usize,
        todo_index: usize,
        completed: bool,
    ) -> Result<()> {
        self.todo_mut(list_index, todo_index)?.set_completed(completed);
        debug!(list = list_index, todo = todo_index, completed, "todo updated");
        Ok(())
    }

    /// Marks every todo in the list as completed.
    pub fn complete_all_todos(&mut self, list_index: usize) -> Result<()> {
        self.list_mut(list_index)?.complete_all();
        debug!(list = list_index, "all todos completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_new_manager_is_empty() {
        let lists = ListManager::new();
        assert!(lists.is_empty());
        assert!(lists.lists().is_empty());
    }

    #[test]
    fn test_create_list_trims_name() {
        let mut lists = ListManager::new();
        let list = lists.create_list("  Work  ").unwrap();
        assert_eq!(list.name, "Work");
        assert!(list.todos.is_empty());
        assert_eq!(lists.lists()[0].name, "Work");
    }

    #[test]
    fn test_create_list_rejects_blank_and_duplicate() {
        let mut lists = ListManager::new();
        assert_eq!(
            lists.create_list("   ").unwrap_err(),
            ListError::Validation(ValidationError::ListNameLength)
        );

        lists.create_list("Work").unwrap();
        assert_eq!(
            lists.create_list(" Work ").unwrap_err(),
            ListError::Validation(ValidationError::ListNameNotUnique)
        );
        assert_eq!(lists.len(), 1);
    }

    #[test]
    fn test_rename_list() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        lists.rename_list(0, " Home ").unwrap();
        assert_eq!(lists.list(0).unwrap().name, "Home");
    }

    #[test]
    fn test_rename_to_own_name_is_duplicate() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        assert_eq!(
            lists.rename_list(0, "Work").unwrap_err(),
            ListError::Validation(ValidationError::ListNameNotUnique)
        );
    }

    #[test]
    fn test_rename_to_other_list_name_is_duplicate() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        lists.create_list("Home").unwrap();

        assert_eq!(
            lists.rename_list(1, " Work ").unwrap_err(),
            ListError::Validation(ValidationError::ListNameNotUnique)
        );
        assert_eq!(lists.list(1).unwrap().name, "Home");
    }

    #[test]
    fn test_rename_missing_list_is_not_found_before_validation() {
        let mut lists = ListManager::new();
        assert_eq!(
            lists.rename_list(3, "").unwrap_err(),
            ListError::ListNotFound(3)
        );
    }

    #[test]
    fn test_delete_list_shifts_indices() {
        let mut lists = ListManager::new();
        lists.create_list("A").unwrap();
        lists.create_list("B").unwrap();

        let removed = lists.delete_list(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists.list(0).unwrap().name, "B");
        assert_eq!(lists.list(1).unwrap_err(), ListError::ListNotFound(1));
    }

    #[test]
    fn test_todo_lifecycle() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();

        let todo = lists.create_todo(0, " Buy milk ").unwrap();
        assert_eq!(todo.name, "Buy milk");
        assert!(!todo.completed);
        assert!(!lists.list(0).unwrap().is_complete());

        lists.set_todo_completed(0, 0, true).unwrap();
        assert!(lists.list(0).unwrap().is_complete());

        let removed = lists.delete_todo(0, 0).unwrap();
        assert_eq!(removed.name, "Buy milk");
        assert_eq!(lists.list(0).unwrap().todo_count(), 0);
        assert!(!lists.list(0).unwrap().is_complete());
    }

    #[test]
    fn test_create_todo_validates_name() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        assert_eq!(
            lists.create_todo(0, "").unwrap_err(),
            ListError::Validation(ValidationError::TodoNameLength)
        );
        assert_eq!(lists.list(0).unwrap().todo_count(), 0);
    }

    #[test]
    fn test_create_todo_on_missing_list() {
        let mut lists = ListManager::new();
        assert_eq!(
            lists.create_todo(0, "x").unwrap_err(),
            ListError::ListNotFound(0)
        );
    }

    #[test]
    fn test_todo_operations_on_missing_todo() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        let missing = ListError::TodoNotFound { list: 0, todo: 2 };

        assert_eq!(lists.delete_todo(0, 2).unwrap_err(), missing);
        assert_eq!(lists.set_todo_completed(0, 2, true).unwrap_err(), missing);
    }

    #[test]
    fn test_todo_can_be_reopened() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        lists.create_todo(0, "a").unwrap();
        lists.complete_all_todos(0).unwrap();
        lists.set_todo_completed(0, 0, false).unwrap();
        assert!(!lists.list(0).unwrap().todos[0].completed);
    }

    #[test]
    fn test_complete_all_todos() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();
        lists.create_todo(0, "a").unwrap();
        lists.create_todo(0, "b").unwrap();

        lists.complete_all_todos(0).unwrap();
        let list = lists.list(0).unwrap();
        assert!(list.todos.iter().all(|todo| todo.completed));
        assert!(list.is_complete());

        assert_eq!(
            lists.complete_all_todos(4).unwrap_err(),
            ListError::ListNotFound(4)
        );
    }

    #[test]
    fn test_serializes_as_plain_sequence() {
        let mut lists = ListManager::new();
        lists.create_list("Work").unwrap();

        let value = serde_json::to_value(&lists).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "Work");

        let restored: ListManager = serde_json::from_value(value).unwrap();
        assert_eq!(restored, lists);
    }
}
