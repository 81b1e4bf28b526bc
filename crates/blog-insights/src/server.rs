//! HTTP server for the blog insights endpoints
//!
//! Provides /, /health, /api/blog-stats, and /api/blog-search.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use blog_feed_client::{BlogFeedClient, BlogFeedError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::cache::QueryCache;
use crate::error::AppError;
use crate::search;
use crate::stats;
use crate::types::{HealthResponse, SearchReport, StatsReport};

/// Shared state for the HTTP server
pub struct ServerState {
    pub feed: BlogFeedClient,
    pub search_cache: QueryCache,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(feed: BlogFeedClient) -> Self {
        Self {
            feed,
            search_cache: QueryCache::new(),
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/api/blog-stats", get(blog_stats))
        .route("/api/blog-search", get(blog_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Liveness probe
async fn hello() -> Json<Value> {
    Json(json!({ "message": "hello" }))
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache: state.search_cache.stats(),
    })
}

/// Fetch the collection and compute a fresh stats report
async fn blog_stats(State(state): State<SharedState>) -> Result<Json<StatsReport>, AppError> {
    let blogs = state
        .feed
        .fetch_blogs()
        .await
        .map_err(|e| AppError::StatsUnavailable(e.to_string()))?;

    Ok(Json(stats::compute_stats(&blogs)))
}

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
}

/// Search blog titles, memoizing the report per raw query string
async fn blog_search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchReport>, AppError> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or(AppError::MissingQuery)?;

    let key = QueryCache::cache_key(&query);
    let feed_state = Arc::clone(&state);
    let report = state
        .search_cache
        .get_or_compute(key, || async move {
            let blogs = feed_state.feed.fetch_blogs().await?;
            Ok::<_, BlogFeedError>(search::search_blogs(&blogs, &query))
        })
        .await
        .map_err(|e| AppError::SearchUnavailable(e.to_string()))?;

    Ok(Json(report))
}
