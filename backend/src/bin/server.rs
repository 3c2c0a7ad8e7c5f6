//! Commit Sky HTTP Server Binary
//!
//! Main entry point for the contribution layout REST API.
//! It loads configuration, selects a contribution source, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Live data from GitHub
//! GITHUB_TOKEN=ghp_... cargo run --bin commit-sky-server
//!
//! # Offline, from a JSON fixture
//! CONTRIB_FIXTURE=fixtures/octocat.json cargo run --bin commit-sky-server
//! ```
//!
//! # Environment Variables
//!
//! - `COMMIT_SKY_CONFIG`: Path to a TOML config file (default: `commit-sky.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `GITHUB_TOKEN`: GraphQL API token
//! - `CONTRIB_FIXTURE`: Serve records from a JSON fixture instead of GitHub
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commit_sky::config::AppConfig;
use commit_sky::fetcher::{ContributionCache, ContributionFetcher, ContributionSource, GitHubClient, InMemorySource};
use commit_sky::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Commit Sky HTTP Server");

    let config = AppConfig::load()?;
    let source = select_source(&config)?;
    match &source {
        Some(source) => info!("Contribution source: {}", source.name()),
        None => warn!("GITHUB_TOKEN is not set; uncached requests will fail"),
    }

    // Create application state
    let fetcher = ContributionFetcher::new(source, ContributionCache::new(config.cache.ttl()), config.github.years);
    let state = AppState::new(fetcher, config.layout.clone());

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// A configured fixture wins over the GitHub API; no token means no source.
fn select_source(config: &AppConfig) -> anyhow::Result<Option<Arc<dyn ContributionSource>>> {
    if let Some(path) = &config.github.fixture {
        let source = InMemorySource::from_json_file(path)?;
        return Ok(Some(Arc::new(source)));
    }

    if config.github.token.is_none() {
        return Ok(None);
    }

    let client = GitHubClient::from_settings(&config.github)?;
    Ok(Some(Arc::new(client)))
}
