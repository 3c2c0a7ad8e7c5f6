//! HTTP handlers for the REST API.
//!
//! Each handler resolves the user's contribution set through the cached
//! fetcher and delegates to the layout core or the service layer.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::dto::{
    CalendarHeatmap, ContributionsQuery, DayRecord, GridQuery, GridResponse, HealthResponse,
    HoverQuery, HoverResponse, MountainsQuery, MountainsResponse, SkyLayout, StarsQuery,
    StarsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::layout::{
    grid_lines, mountain_instances, scatter_stars, DEFAULT_MOUNTAIN_COUNT, DEFAULT_MOUNTAIN_RADIUS,
};
use crate::models::Position3D;
use crate::services::{build_heatmap, compute_sky_layout};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DEFAULT_LATITUDE_LINES: usize = 7;
const MAX_LATITUDE_LINES: usize = 32;
const MAX_MOUNTAINS: usize = 1_000;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        source: state
            .fetcher
            .source_name()
            .unwrap_or("unconfigured")
            .to_string(),
        cached_users: state.fetcher.cache().len(),
    }))
}

// =============================================================================
// Contributions
// =============================================================================

/// GET /v1/contributions?username=<login>
///
/// Ordered day records of the user's last years of contributions.
pub async fn get_contributions(
    State(state): State<AppState>,
    Query(query): Query<ContributionsQuery>,
) -> HandlerResult<Vec<DayRecord>> {
    let set = state.fetcher.fetch(query.username.as_deref()).await?;
    Ok(Json(set.records.clone()))
}

// =============================================================================
// Layout Endpoints
// =============================================================================

/// GET /v1/users/{username}/layout
///
/// Segments, day anchors, year labels and ground extent.
pub async fn get_layout(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> HandlerResult<SkyLayout> {
    let set = state.fetcher.fetch(Some(&username)).await?;
    Ok(Json(compute_sky_layout(&set.records, &set.segments, &state.layout)))
}

/// GET /v1/users/{username}/stars?seed=<n>
///
/// Star instances scattered around each active day's anchor.
pub async fn get_stars(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<StarsQuery>,
) -> HandlerResult<StarsResponse> {
    let set = state.fetcher.fetch(Some(&username)).await?;
    let layout = state.layout.clone();

    // Scatter can produce up to max_stars instances; keep it off the runtime threads
    let stars = tokio::task::spawn_blocking(move || {
        let mut rng = match query.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        scatter_stars(&set.records, &layout, &mut rng)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(StarsResponse {
        total: stars.len(),
        stars,
    }))
}

/// GET /v1/users/{username}/hover?x=&y=&z=
///
/// Day nearest to a scene point, for tooltips.
pub async fn get_hover(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(point): Query<HoverQuery>,
) -> HandlerResult<HoverResponse> {
    let set = state.fetcher.fetch(Some(&username)).await?;
    let hit = set
        .arc_layout(&state.layout)
        .day_at(Position3D::new(point.x, point.y, point.z));

    Ok(Json(HoverResponse {
        day_index: hit.map(|(index, _)| index),
        day: hit.map(|(_, day)| *day),
    }))
}

/// GET /v1/users/{username}/heatmap
///
/// Calendar heatmap for the HUD.
pub async fn get_heatmap(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> HandlerResult<CalendarHeatmap> {
    let set = state.fetcher.fetch(Some(&username)).await?;
    Ok(Json(build_heatmap(&set.records)))
}

/// GET /v1/users/{username}/grid?latitude_lines=<n>
///
/// Spherical guide grid over the user's arcs.
pub async fn get_grid(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<GridQuery>,
) -> HandlerResult<GridResponse> {
    let latitude_lines = query.latitude_lines.unwrap_or(DEFAULT_LATITUDE_LINES);
    if !(2..=MAX_LATITUDE_LINES).contains(&latitude_lines) {
        return Err(AppError::BadRequest(format!(
            "latitude_lines must be between 2 and {}, got {}",
            MAX_LATITUDE_LINES, latitude_lines
        )));
    }

    let set = state.fetcher.fetch(Some(&username)).await?;
    let arcs = set.segments.len();
    let layout = state.layout.clone();

    let lines = tokio::task::spawn_blocking(move || grid_lines(arcs, latitude_lines, &layout))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(GridResponse { arcs, lines }))
}

// =============================================================================
// Scenery
// =============================================================================

/// GET /v1/mountains?seed=<n>&count=<n>&radius=<r>
///
/// Decorative mountains on a ring around the scene. Independent of any user.
pub async fn get_mountains(Query(query): Query<MountainsQuery>) -> HandlerResult<MountainsResponse> {
    let count = query.count.unwrap_or(DEFAULT_MOUNTAIN_COUNT);
    if count > MAX_MOUNTAINS {
        return Err(AppError::BadRequest(format!(
            "count must be at most {}, got {}",
            MAX_MOUNTAINS, count
        )));
    }
    let radius = query.radius.unwrap_or(DEFAULT_MOUNTAIN_RADIUS);
    if !radius.is_finite() || radius <= 0.0 {
        return Err(AppError::BadRequest(format!("radius must be a positive number, got {}", radius)));
    }

    let mut rng = match query.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mountains = mountain_instances(count, radius, &mut rng);

    Ok(Json(MountainsResponse {
        total: mountains.len(),
        mountains,
    }))
}
