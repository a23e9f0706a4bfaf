//! List manager for session-backed todo lists.
//!
//! This crate provides the `ListManager` that owns one session's lists:
//! - Create, rename and delete lists addressed by position
//! - Add, toggle, delete and bulk-complete todos within a list
//! - Pure validation rules for list and todo names
//! - Display ordering that shows unfinished items first
//!
//! # Example
//!
//! ```
//! use todo_lists::ListManager;
//!
//! let mut lists = ListManager::new();
//! lists.create_list("  Groceries ").unwrap();
//! lists.create_todo(0, "Buy milk").unwrap();
//! lists.set_todo_completed(0, 0, true).unwrap();
//!
//! assert!(lists.list(0).unwrap().is_complete());
//! ```

pub mod error;
pub mod manager;
pub mod ordering;
pub mod validation;

pub use error::{ListError, Result, ValidationError};
pub use manager::ListManager;
pub use ordering::unfinished_first;
pub use validation::{validate_list_name, validate_todo_name, MAX_NAME_LEN, MIN_NAME_LEN};
