//! TaskTrack API Server

use std::net::SocketAddr;

use axum::http::HeaderValue;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tasktrack_server::{http, AppState, Config};

/// TaskTrack task-tracking API server.
#[derive(Parser, Debug)]
#[command(name = "tasktrack-server", about = "TaskTrack task-tracking API server")]
struct Args {
    /// HTTP server bind address
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind_addr: String,

    /// Origin allowed for cross-origin requests (repeatable)
    #[arg(long = "allowed-origin", default_value = "http://localhost:5173")]
    allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config
    let args = Args::parse();
    let config = Config {
        bind_addr: args.bind_addr,
        allowed_origins: args.allowed_origins,
    };

    let http_addr: SocketAddr = config.bind_addr.parse()?;

    // A bad origin is a startup error, not a runtime panic.
    let mut origins = Vec::with_capacity(config.allowed_origins.len());
    for origin in &config.allowed_origins {
        let value = origin
            .parse::<HeaderValue>()
            .map_err(|e| format!("Invalid allowed origin '{}': {}", origin, e))?;
        origins.push(value);
    }

    // Create shared state (empty store, counter at 1)
    let state = AppState::new();

    let router = http::create_router(state, origins);

    info!(http_addr = %http_addr, "Starting TaskTrack server");
    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
