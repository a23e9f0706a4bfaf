//! Form bodies posted by the HTML pages.
//!
//! Missing fields deserialize as empty so they fail name validation rather
//! than the extractor.

use serde::Deserialize;

/// Create or rename list form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNameForm {
    /// Requested list name, untrimmed.
    #[serde(default)]
    pub list_name: String,
}

/// Add todo form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoForm {
    /// Requested todo name, untrimmed.
    #[serde(default)]
    pub todo: String,
}

/// Toggle todo form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletedForm {
    /// `"true"` marks the todo done; anything else reopens it.
    #[serde(default)]
    pub completed: Option<String>,
}

impl CompletedForm {
    /// Parsed completion flag.
    pub fn is_completed(&self) -> bool {
        self.completed.as_deref() == Some("true")
    }
}
