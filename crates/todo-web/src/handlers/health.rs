//! Health check handler.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.uptime_seconds(),
        sessions: state.sessions.len().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WebConfig;

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::new(WebConfig::default());
        state.sessions.create().await;

        let response = health(State(state)).await;
        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
        assert_eq!(response.sessions, 1);
    }
}
