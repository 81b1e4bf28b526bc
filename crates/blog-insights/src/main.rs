//! Blog Insights Service - blog feed statistics and search
//!
//! Proxies a remote blog feed and serves aggregate statistics and
//! cached title search over it.

mod cache;
mod config;
mod error;
mod search;
mod server;
mod stats;
mod types;

use std::sync::Arc;

use blog_feed_client::BlogFeedClient;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::server::{start_server, ServerState, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("blog_insights=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Blog Insights Service...");

    // Load configuration from environment; a missing required variable
    // aborts startup before any listener binds.
    let config = Config::from_env()?;
    info!("Port: {}", config.port);
    info!("Feed URL: {}", config.feed_url);

    let feed = BlogFeedClient::new(&config.feed_url, &config.admin_secret);

    // Create shared state
    let state: SharedState = Arc::new(ServerState::new(feed));

    // Start HTTP server (blocking)
    start_server(state, config.port)
        .await
        .map_err(|e| ServiceError::Config(format!("Server error: {}", e)))?;

    Ok(())
}
