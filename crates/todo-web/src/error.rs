//! Web error types.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use todo_lists::ListError;
use tracing::{error, warn};

use crate::views;

/// Result type for web operations.
pub type Result<T> = std::result::Result<T, WebError>;

/// Error type rendered as an HTML error page.
#[derive(Debug, Error)]
pub enum WebError {
    /// Addressed list or todo does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Submitted form data was rejected.
    #[error("{0}")]
    Unprocessable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WebError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            WebError::Internal(_) => error!(error = %self, "request failed"),
            _ => warn!(error = %self, "request rejected"),
        }
        let body = Html(views::error_page(status, &self.to_string()));
        (status, body).into_response()
    }
}

impl From<ListError> for WebError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Validation(err) => WebError::Unprocessable(err.to_string()),
            _ => WebError::NotFound(err.to_string()),
        }
    }
}
