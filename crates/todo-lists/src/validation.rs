//! Name validation rules.
//!
//! Names are measured in characters after trimming. Callers trim before
//! validating; these functions never modify their input.

use crate::error::ValidationError;

/// Shortest accepted name.
pub const MIN_NAME_LEN: usize = 1;

/// Longest accepted name.
pub const MAX_NAME_LEN: usize = 100;

fn length_ok(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.chars().count())
}

/// Checks a list name against the length bounds, then against the names
/// already in use (exact, case-sensitive match).
pub fn validate_list_name<S: AsRef<str>>(
    name: &str,
    existing_names: &[S],
) -> Result<(), ValidationError> {
    if !length_ok(name) {
        return Err(ValidationError::ListNameLength);
    }
    if existing_names.iter().any(|existing| existing.as_ref() == name) {
        return Err(ValidationError::ListNameNotUnique);
    }
    Ok(())
}

/// Checks a todo name against the length bounds.
pub fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    if !length_ok(name) {
        return Err(ValidationError::TodoNameLength);
    }
    Ok(())
}
