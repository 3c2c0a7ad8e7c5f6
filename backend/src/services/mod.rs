//! Service layer assembling layout products for the HTTP handlers.

pub mod heatmap;
pub mod sky;

pub use heatmap::{build_heatmap, CalendarHeatmap, HeatmapCell};
pub use sky::{compute_sky_layout, AnchorPoint, SkyLayout};
