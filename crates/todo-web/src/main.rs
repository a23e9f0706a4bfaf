//! Todo list web server binary.
//!
//! Start the server with:
//! ```bash
//! cargo run -p todo-web -- --port 4567
//! ```

use std::time::Duration;

use clap::Parser;
use todo_web::config::{DEFAULT_COOKIE_NAME, DEFAULT_MAX_SESSIONS, DEFAULT_PORT};
use todo_web::{serve, AppState, WebConfig};
use tracing_subscriber::EnvFilter;

/// Todo Tracker - session-backed todo lists in the browser
#[derive(Parser, Debug)]
#[command(name = "todo-web")]
#[command(about = "Serve session-backed todo lists over HTTP")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "TODO_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Name of the session cookie
    #[arg(long, env = "TODO_COOKIE_NAME", default_value = DEFAULT_COOKIE_NAME)]
    cookie_name: String,

    /// Minutes a session may sit idle before it is dropped
    #[arg(long, env = "TODO_SESSION_IDLE_MINUTES", default_value_t = 30)]
    session_idle_minutes: u64,

    /// Maximum number of sessions kept in memory
    #[arg(long, env = "TODO_MAX_SESSIONS", default_value_t = DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env.local or .env before parsing so env-backed flags see them
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let args = Args::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = match args.verbose {
        0 => "todo_web=info,todo_lists=info,tower_http=warn",
        1 => "todo_web=debug,todo_lists=debug,tower_http=info",
        2 => "todo_web=trace,todo_lists=trace,tower_http=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = WebConfig::new(args.host, args.port)
        .with_cookie_name(args.cookie_name)
        .with_idle_timeout(Duration::from_secs(args.session_idle_minutes * 60))
        .with_max_sessions(args.max_sessions);
    tracing::info!(
        address = %config.bind_address(),
        cookie = %config.cookie_name,
        max_sessions = config.max_sessions,
        "starting todo server"
    );

    serve(AppState::new(config)).await?;
    Ok(())
}
