//! Web front end for session-backed todo lists.
//!
//! This crate serves server-rendered HTML pages over axum:
//! - Per-browser sessions keyed by a cookie, held in memory
//! - List and todo CRUD through plain form posts
//! - One-shot flash messages shown on the next page render
//!
//! # Example
//!
//! ```ignore
//! use todo_web::{serve, AppState, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(WebConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;
pub mod types;
pub mod views;

pub use config::WebConfig;
pub use error::{Result, WebError};
pub use router::{create_router, serve};
pub use session::{Flash, SessionData, SessionId, SessionStore};
pub use state::AppState;
