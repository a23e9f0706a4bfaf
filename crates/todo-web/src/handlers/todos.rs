//! Todo handlers.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use todo_lists::ListError;

use crate::error::Result;
use crate::handlers::{list_index, rerender, todo_index};
use crate::session::SessionId;
use crate::state::AppState;
use crate::types::{CompletedForm, TodoForm};
use crate::views;

pub const TODO_ADDED: &str = "The todo was added.";
pub const TODO_DELETED: &str = "The todo has been deleted.";
pub const TODO_UPDATED: &str = "The todo has been updated.";
pub const TODOS_COMPLETED: &str = "All todos have been completed.";

fn list_location(index: usize) -> String {
    format!("/lists/{}", index)
}

/// POST /lists/:id/todos - Add a todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
    Form(form): Form<TodoForm>,
) -> Result<Response> {
    let index = list_index(&id)?;
    state
        .with_session(&session, |data| -> Result<Response> {
            match data.lists.create_todo(index, &form.todo).map(|_| ()) {
                Ok(()) => {
                    data.set_success(TODO_ADDED);
                    Ok(Redirect::to(&list_location(index)).into_response())
                }
                Err(ListError::Validation(err)) => rerender(data, err, |data, flash| {
                    let list = data.lists.list(index)?;
                    Ok(views::list_page(index, list, &form.todo, flash))
                }),
                Err(err) => Err(err.into()),
            }
        })
        .await?
}

/// POST /lists/:id/todos/:tid/destroy - Delete a todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((id, tid)): Path<(String, String)>,
) -> Result<Redirect> {
    let index = list_index(&id)?;
    let todo = todo_index(index, &tid)?;
    state
        .with_session(&session, |data| -> Result<Redirect> {
            data.lists.delete_todo(index, todo)?;
            data.set_success(TODO_DELETED);
            Ok(Redirect::to(&list_location(index)))
        })
        .await?
}

/// POST /lists/:id/todos/:tid - Mark a todo done or open.
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((id, tid)): Path<(String, String)>,
    Form(form): Form<CompletedForm>,
) -> Result<Redirect> {
    let index = list_index(&id)?;
    let todo = todo_index(index, &tid)?;
    state
        .with_session(&session, |data| -> Result<Redirect> {
            data.lists.set_todo_completed(index, todo, form.is_completed())?;
            data.set_success(TODO_UPDATED);
            Ok(Redirect::to(&list_location(index)))
        })
        .await?
}

/// POST /lists/:id/complete_all - Mark every todo in a list done.
pub async fn complete_all(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let index = list_index(&id)?;
    state
        .with_session(&session, |data| -> Result<Redirect> {
            data.lists.complete_all_todos(index)?;
            data.set_success(TODOS_COMPLETED);
            Ok(Redirect::to(&list_location(index)))
        })
        .await?
}
