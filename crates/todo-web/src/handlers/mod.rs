//! Request handlers.

pub mod health;
pub mod lists;
pub mod todos;

pub use health::*;
pub use lists::*;
pub use todos::*;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use todo_lists::ValidationError;

use crate::error::{Result, WebError};
use crate::session::{Flash, SessionData};

/// Parses a list position from the path. Anything that is not an unsigned
/// integer cannot address a list.
pub(crate) fn list_index(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| WebError::NotFound(format!("list not found: {}", raw)))
}

/// Parses a todo position from the path.
pub(crate) fn todo_index(list: usize, raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| WebError::NotFound(format!("todo not found: {} in list {}", raw, list)))
}

/// Queues the validation message as an error flash and re-renders the
/// originating form with it.
pub(crate) fn rerender(
    data: &mut SessionData,
    err: ValidationError,
    render: impl FnOnce(&SessionData, Option<Flash>) -> Result<String>,
) -> Result<Response> {
    data.set_error(err.to_string());
    let flash = data.take_flash();
    let html = render(data, flash)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
}
