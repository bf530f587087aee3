mod error;
mod health;
mod routes;
mod schedule;
mod state;

use std::sync::Arc;

use axum::serve;
use tracing::{Level, info};

use mimalloc::MiMalloc;

use crate::{routes::app, state::AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let state = Arc::new(AppState::from_env());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, app(state)).await?;

    Ok(())
}
