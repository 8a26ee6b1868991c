//! Launch dashboard HTTP server binary.
//!
//! Loads the launch records once, builds the dashboard layout and serves the
//! REST API until interrupted.
//!
//! # Usage
//!
//! ```bash
//! DATA_PATH=spacex_launch_dash.csv \
//!   cargo run --bin launch-dash-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DATA_PATH`: Launch records CSV (default: spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::config::AppConfig;
use launch_dash::http::{create_router, AppState};
use launch_dash::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let config = AppConfig::load()?;

    // The dashboard cannot run without its records
    let store = RecordStore::load(&config.data.path).with_context(|| {
        format!(
            "failed to load launch records from {}",
            config.data.path.display()
        )
    })?;
    info!(
        "Loaded {} launch records from {} site(s)",
        store.len(),
        store.sites().len()
    );

    let state = AppState::new(store, &config.slider)?;
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Dashboard layout: http://{}/v1/layout", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
