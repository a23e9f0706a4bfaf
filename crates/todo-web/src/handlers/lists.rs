//! List handlers.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use todo_lists::ListError;

use crate::error::Result;
use crate::handlers::{list_index, rerender};
use crate::session::SessionId;
use crate::state::AppState;
use crate::types::ListNameForm;
use crate::views;

pub const LIST_CREATED: &str = "The list has been created.";
pub const LIST_UPDATED: &str = "The list has been updated.";
pub const LIST_DELETED: &str = "The list has been deleted.";

/// GET / - Redirect to the list index.
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists - Show all lists.
pub async fn list_lists(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>> {
    state
        .with_session(&session, |data| {
            let flash = data.take_flash();
            Html(views::lists_page(data.lists.lists(), flash))
        })
        .await
}

/// GET /lists/new - Show the new list form.
pub async fn new_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>> {
    state
        .with_session(&session, |data| {
            Html(views::new_list_page("", data.take_flash()))
        })
        .await
}

/// POST /lists - Create a list.
pub async fn create_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ListNameForm>,
) -> Result<Response> {
    state
        .with_session(&session, |data| -> Result<Response> {
            match data.lists.create_list(&form.list_name).map(|_| ()) {
                Ok(()) => {
                    data.set_success(LIST_CREATED);
                    Ok(Redirect::to("/lists").into_response())
                }
                Err(ListError::Validation(err)) => rerender(data, err, |_, flash| {
                    Ok(views::new_list_page(&form.list_name, flash))
                }),
                Err(err) => Err(err.into()),
            }
        })
        .await?
}

/// GET /lists/:id - Show one list.
pub async fn show_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let index = list_index(&id)?;
    state
        .with_session(&session, |data| -> Result<Html<String>> {
            let list = data.lists.list(index)?.clone();
            Ok(Html(views::list_page(index, &list, "", data.take_flash())))
        })
        .await?
}

/// GET /lists/:id/edit - Show the rename form.
pub async fn edit_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let index = list_index(&id)?;
    state
        .with_session(&session, |data| -> Result<Html<String>> {
            let list = data.lists.list(index)?.clone();
            let flash = data.take_flash();
            Ok(Html(views::edit_list_page(index, &list, &list.name, flash)))
        })
        .await?
}

/// POST /lists/:id - Rename a list.
pub async fn rename_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
    Form(form): Form<ListNameForm>,
) -> Result<Response> {
    let index = list_index(&id)?;
    state
        .with_session(&session, |data| -> Result<Response> {
            match data.lists.rename_list(index, &form.list_name) {
                Ok(()) => {
                    data.set_success(LIST_UPDATED);
                    Ok(Redirect::to(&format!("/lists/{}", index)).into_response())
                }
                Err(ListError::Validation(err)) => rerender(data, err, |data, flash| {
                    let list = data.lists.list(index)?;
                    Ok(views::edit_list_page(index, list, &form.list_name, flash))
                }),
                Err(err) => Err(err.into()),
            }
        })
        .await?
}

/// POST /lists/:id/destroy - Delete a list.
pub async fn delete_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let index = list_index(&id)?;
    state
        .with_session(&session, |data| -> Result<Redirect> {
            data.lists.delete_list(index)?;
            data.set_success(LIST_DELETED);
            Ok(Redirect::to("/lists"))
        })
        .await?
}
