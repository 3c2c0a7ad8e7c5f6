//! # Commit Sky
//!
//! Contribution calendar fetcher and 3D night-sky layout engine.
//!
//! A user's daily GitHub contribution counts are laid out as one upright arc
//! per calendar year: days of a year run along the arc, weekdays spread
//! sideways across it, and consecutive years stand side by side. Active days
//! become clusters of stars around their anchor point.
//!
//! ## Architecture
//!
//! - [`models`]: Day records, year segments and 3D geometry primitives
//! - [`layout`]: Pure forward and inverse arc layout plus scene furniture
//! - [`fetcher`]: GitHub GraphQL client, fixture source and per-user TTL cache
//! - [`services`]: Layout summaries and the calendar heatmap
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based REST API (behind the `http-server` feature)
//!
//! ## Example
//!
//! ```
//! use commit_sky::layout::{layout_forward, layout_inverse, segment_by_year, LayoutConfig};
//! use commit_sky::models::DayRecord;
//!
//! let records = vec![
//!     DayRecord::parse("2023-12-31", 3).unwrap(),
//!     DayRecord::parse("2024-01-01", 1).unwrap(),
//! ];
//! let segments = segment_by_year(&records);
//! let config = LayoutConfig::default();
//!
//! let anchors = layout_forward(&records, &config);
//! let (index, day) = layout_inverse(anchors[&1], &records, &segments, &config).unwrap();
//! assert_eq!(index, 1);
//! assert_eq!(day.year, 2024);
//! ```

pub mod config;
pub mod fetcher;
pub mod layout;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
