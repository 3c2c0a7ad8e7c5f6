//! Contribution layout: pure geometry mapping day records onto yearly arcs.
//!
//! ```text
//!   records ──► segment_by_year ──► YearSegment[] ──┬──► layout_forward  (day → anchor)
//!                                                   ├──► layout_inverse  (point → day)
//!                                                   └──► labels / grid / ground
//!
//!   rng ──► mountain_instances (decorative ring around the scene)
//! ```
//!
//! Nothing in here allocates shared state or performs I/O; callers own every
//! buffer and recompute when the records or the configuration change.

pub mod config;
pub mod forward;
pub mod inverse;
pub mod scene;
pub mod segmentation;

pub use config::LayoutConfig;
pub use forward::{
    anchors_for_segments, arc_x_offset, layout_forward, scatter_radius, scatter_stars,
    twinkle_intensity,
};
pub use inverse::{layout_inverse, locate_day, ArcLayout};
pub use scene::{
    grid_arcs_for_days, grid_lines, ground_extent, labels_for_segments, mountain_instances,
    year_labels, GroundExtent, DEFAULT_MOUNTAIN_COUNT, DEFAULT_MOUNTAIN_RADIUS,
};
pub use segmentation::{segment_by_year, validate_records, LayoutInputError};
