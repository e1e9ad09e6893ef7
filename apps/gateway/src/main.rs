//! # Spicebill Gateway
//!
//! HTTP server exposing the billing core to the client forms.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gateway Server                                   │
//! │                                                                         │
//! │  Client forms ───► HTTP (8080) ───► Handlers ───► Stores ───► JSON     │
//! │                                        │                      files    │
//! │                                        ▼                               │
//! │                                   AdminGate                            │
//! │                                (admin routes)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod config;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use spicebill_store::Store;

use crate::auth::StaticToken;
use crate::config::GatewayConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Spicebill gateway...");

    let config = GatewayConfig::load()?;
    info!(data_dir = %config.data_dir.display(), port = config.port, "configuration loaded");

    // Load the three documents once; the stores write through from here on
    let store = Store::open(&config.data_dir).await?;
    let state = AppState::new(store, StaticToken::new(config.admin_token.clone()));

    let app = routes::router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
