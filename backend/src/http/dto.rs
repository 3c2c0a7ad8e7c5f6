//! Data Transfer Objects for the HTTP API.
//!
//! Layout payloads are re-exported from the service layer since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::models::{DayRecord, GridLine, MountainInstance, StarInstance};
pub use crate::services::{CalendarHeatmap, SkyLayout};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Name of the configured contribution source, or `unconfigured`
    pub source: String,
    pub cached_users: usize,
}

/// Query parameters for the contributions endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionsQuery {
    #[serde(default)]
    pub username: Option<String>,
}

/// Query parameters for the stars endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarsQuery {
    /// Seed for reproducible scatter; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Star instances of one user's sky.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsResponse {
    pub total: usize,
    pub stars: Vec<StarInstance>,
}

/// Query parameters for the hover endpoint: a point in scene space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HoverQuery {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Day under a scene point; both fields are null on a miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverResponse {
    pub day_index: Option<usize>,
    pub day: Option<DayRecord>,
}

/// Query parameters for the grid endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridQuery {
    #[serde(default)]
    pub latitude_lines: Option<usize>,
}

/// Guide grid line segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridResponse {
    pub arcs: usize,
    pub lines: Vec<GridLine>,
}

/// Query parameters for the mountains endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MountainsQuery {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub radius: Option<f64>,
}

/// Decorative mountain ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountainsResponse {
    pub total: usize,
    pub mountains: Vec<MountainInstance>,
}
