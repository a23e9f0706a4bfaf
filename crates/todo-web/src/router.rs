//! Router configuration and server setup.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::handlers;
use crate::session::session_middleware;
use crate::state::AppState;

/// Creates the application router with all routes configured.
///
/// Every page route runs inside a session. `/health` is mounted after the
/// session layer so probes do not create sessions.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Lists
        .route(
            "/lists",
            get(handlers::list_lists).post(handlers::create_list),
        )
        .route("/lists/new", get(handlers::new_list))
        .route(
            "/lists/:id",
            get(handlers::show_list).post(handlers::rename_list),
        )
        .route("/lists/:id/edit", get(handlers::edit_list))
        .route("/lists/:id/destroy", post(handlers::delete_list))
        .route("/lists/:id/complete_all", post(handlers::complete_all))
        // Todos
        .route("/lists/:id/todos", post(handlers::create_todo))
        .route("/lists/:id/todos/:tid", post(handlers::update_todo))
        .route("/lists/:id/todos/:tid/destroy", post(handlers::delete_todo))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        // Health
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server and runs until Ctrl-C.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("todo server listening on http://{}", addr);

    let sweeper = tokio::spawn(purge_sessions(state.clone()));
    let result = axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    sweeper.abort();
    result
}

/// Drops idle sessions once a minute, or sooner for short timeouts.
async fn purge_sessions(state: AppState) {
    let period = state
        .config
        .idle_timeout
        .min(Duration::from_secs(60))
        .max(Duration::from_secs(1));
    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;
        let removed = state.sessions.purge_expired().await;
        if removed > 0 {
            debug!(removed, "expired sessions purged");
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
