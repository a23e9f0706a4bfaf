//! Core data models for todo lists.
//!
//! This crate provides the typed records shared by the list manager and
//! the web layer: lists and their todos.

pub mod list;
pub mod todo;

// Re-export main types
pub use list::{TodoList, COMPLETE_CLASS};
pub use todo::Todo;
