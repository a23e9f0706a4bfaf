//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::error::{Result, WebError};
use crate::session::{SessionData, SessionId, SessionStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Web configuration.
    pub config: Arc<WebConfig>,
    /// In-memory session store.
    pub sessions: SessionStore,
}

impl AppState {
    /// Creates a new AppState with an empty session store sized by `config`.
    pub fn new(config: WebConfig) -> Self {
        let sessions = SessionStore::new(config.idle_timeout, config.max_sessions);
        Self {
            config: Arc::new(config),
            sessions,
        }
    }

    /// Runs `f` against the session's data under the store's write lock.
    pub async fn with_session<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut SessionData) -> R,
    ) -> Result<R> {
        self.sessions
            .update(id, f)
            .await
            .ok_or_else(|| WebError::Internal(format!("session not found: {}", id)))
    }
}
