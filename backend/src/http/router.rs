//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The rendering client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/contributions", get(handlers::get_contributions))
        .route("/users/{username}/layout", get(handlers::get_layout))
        .route("/users/{username}/stars", get(handlers::get_stars))
        .route("/users/{username}/hover", get(handlers::get_hover))
        .route("/users/{username}/heatmap", get(handlers::get_heatmap))
        .route("/users/{username}/grid", get(handlers::get_grid))
        .route("/mountains", get(handlers::get_mountains));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
