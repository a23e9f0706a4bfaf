//! Cookie-keyed sessions held in memory.
//!
//! Each browser gets a random session ID in a cookie. Its lists and its
//! pending flash message live in a `SessionData` inside the store. Requests
//! for one session are applied one at a time under the store's lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use todo_lists::ListManager;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS};
use crate::state::AppState;

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new random ID.
    pub fn new() -> Self {
        Self(format!("sess-{}", Uuid::new_v4()))
    }

    /// Creates an ID from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-shot status message shown on the next render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Flash {
    /// An operation succeeded.
    Success(String),
    /// Submitted input was rejected.
    Error(String),
}

impl Flash {
    /// Message text.
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(message) | Flash::Error(message) => message,
        }
    }

    /// CSS class for rendering.
    pub fn css_class(&self) -> &'static str {
        match self {
            Flash::Success(_) => "flash success",
            Flash::Error(_) => "flash error",
        }
    }
}

/// Everything one session owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    /// The session's lists.
    #[serde(default)]
    pub lists: ListManager,

    /// Pending flash message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flash: Option<Flash>,
}

impl SessionData {
    /// Creates empty session data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a success message, replacing any unread one.
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.flash = Some(Flash::Success(message.into()));
    }

    /// Queues an error message, replacing any unread one.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.flash = Some(Flash::Error(message.into()));
    }

    /// Returns the pending message and clears it.
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }

    /// Returns the pending message without clearing it.
    #[cfg(test)]
    pub(crate) fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }
}

struct SessionEntry {
    data: SessionData,
    last_seen: Instant,
}

impl SessionEntry {
    fn is_expired(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.duration_since(self.last_seen) > idle_timeout
    }
}

/// In-memory map from session ID to session data.
///
/// Sessions idle for longer than `idle_timeout` are dropped, and the store
/// never holds more than `max_sessions` entries. When it is full, starting a
/// session evicts the least recently used one.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    /// Creates an empty store with the given limits.
    pub fn new(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Starts a new empty session and returns its ID.
    pub async fn create(&self) -> SessionId {
        let id = SessionId::new();
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let idle_timeout = self.idle_timeout;
        sessions.retain(|_, entry| !entry.is_expired(now, idle_timeout));
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    debug!(session = %oldest, "session evicted");
                }
                None => break,
            }
        }

        sessions.insert(
            id.clone(),
            SessionEntry {
                data: SessionData::new(),
                last_seen: now,
            },
        );
        debug!(session = %id, live = sessions.len(), "session created");
        id
    }

    /// Marks the session as used now. Returns false for an unknown or
    /// expired ID; an expired entry is removed.
    pub async fn touch(&self, id: &SessionId) -> bool {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let Some(entry) = sessions.get_mut(id) else {
            return false;
        };
        if !entry.is_expired(now, self.idle_timeout) {
            entry.last_seen = now;
            return true;
        }
        sessions.remove(id);
        debug!(session = %id, "session expired");
        false
    }

    /// Returns true if the session exists.
    pub async fn contains(&self, id: &SessionId) -> bool {
        let sessions = self.sessions.read().await;
        sessions.contains_key(id)
    }

    /// Applies `f` to the session's data. Returns `None` for an unknown ID.
    pub async fn update<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut SessionData) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(|entry| {
            entry.last_seen = Instant::now();
            f(&mut entry.data)
        })
    }

    /// Returns a copy of the session's data.
    pub async fn snapshot(&self, id: &SessionId) -> Option<SessionData> {
        let sessions = self.sessions.read().await;
        sessions.get(id).map(|entry| entry.data.clone())
    }

    /// Drops every session idle for longer than the timeout. Returns how
    /// many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let idle_timeout = self.idle_timeout;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, idle_timeout));
        before - sessions.len()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    /// Returns true if no sessions exist.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Reads the session ID from the request's `Cookie` headers.
pub fn session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| SessionId::from_string(value))
}

/// Builds the `Set-Cookie` value for a session.
pub fn session_set_cookie(cookie_name: &str, id: &SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, id)
}

/// Resolves or starts the request's session and exposes its ID to handlers
/// as an `Extension<SessionId>`.
///
/// Unknown or expired IDs (for example after a restart) get a fresh session.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.cookie_name.as_str();

    let mut existing = None;
    if let Some(id) = session_cookie(request.headers(), cookie_name) {
        if state.sessions.touch(&id).await {
            existing = Some(id);
        }
    }
    let (id, fresh) = match existing {
        Some(id) => (id, false),
        None => (state.sessions.create().await, true),
    };

    request.extensions_mut().insert(id.clone());
    let mut response = next.run(request).await;

    if fresh {
        match HeaderValue::from_str(&session_set_cookie(cookie_name, &id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "failed to encode session cookie"),
        }
    }
    response
}
