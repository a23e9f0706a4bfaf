//! Web server configuration.

use std::time::{Duration, Instant};

/// Default session cookie name.
pub const DEFAULT_COOKIE_NAME: &str = "todo_session";

/// Default port.
pub const DEFAULT_PORT: u16 = 4567;

/// Sessions unused for this long are dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Upper bound on live sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Name of the cookie carrying the session ID.
    pub cookie_name: String,
    /// Idle time after which a session is dropped.
    pub idle_timeout: Duration,
    /// Maximum number of sessions held at once.
    pub max_sessions: usize,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl WebConfig {
    /// Creates a new configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the session cookie name.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Sets the session idle timeout.
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Sets the session limit.
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            max_sessions: DEFAULT_MAX_SESSIONS,
            start_time: Instant::now(),
        }
    }
}
