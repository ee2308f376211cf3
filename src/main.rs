// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! H2Omiga Tracker API Server
//!
//! Records household water use per activity and serves consumption
//! summaries, footprint estimates and saving tips as JSON.

use h2omiga_tracker::{
    config::Config,
    db::{JsonFileStore, Repository},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting H2Omiga Tracker API");

    // Open the user data file, creating an empty one on first run
    let store = JsonFileStore::new(&config.data_path);
    store.ensure_exists()?;
    let repo = Repository::new(store);

    let users = repo.snapshot()?.len();
    tracing::info!(
        path = %config.data_path.display(),
        users,
        "User data loaded"
    );

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), repo));

    // Build router
    let app = h2omiga_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("h2omiga_tracker=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
