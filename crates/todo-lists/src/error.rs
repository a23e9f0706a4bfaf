//! Error types for list manager operations.

use thiserror::Error;

/// A rejected list or todo name.
///
/// The display text is shown to users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// List name is empty or too long.
    #[error("The list name must be between 1 and 100 characters.")]
    ListNameLength,

    /// Another list already has this name.
    #[error("The list name must be unique.")]
    ListNameNotUnique,

    /// Todo name is empty or too long.
    #[error("The todo name must be between 1 and 100 characters.")]
    TodoNameLength,
}

/// Errors that can occur during list manager operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Submitted name failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No list at the given position.
    #[error("list not found: {0}")]
    ListNotFound(usize),

    /// No todo at the given position within an existing list.
    #[error("todo not found: {todo} in list {list}")]
    TodoNotFound { list: usize, todo: usize },
}

impl ListError {
    /// Returns true for the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ListError::ListNotFound(_) | ListError::TodoNotFound { .. }
        )
    }
}

/// Result type alias for list manager operations.
pub type Result<T> = std::result::Result<T, ListError>;
