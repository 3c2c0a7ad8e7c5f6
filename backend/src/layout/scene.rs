//! Scene furniture derived from the same arc geometry: year captions, the
//! spherical guide grid and the extent of the ground plane.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use super::forward::{arc_x_offset, point_on_arc, CENTER_WEEKDAY};
use super::segmentation::segment_by_year;
use crate::models::{DayRecord, GridLine, MountainInstance, Position3D, YearLabel, YearSegment};

/// Number of days the guide grid template spans per year.
pub const GRID_DAYS_PER_YEAR: usize = 366;

/// One label per year, at the start of its arc on the centre column.
pub fn year_labels(records: &[DayRecord], config: &LayoutConfig) -> Vec<YearLabel> {
    labels_for_segments(&segment_by_year(records), config)
}

/// Year labels computed against precomputed segments.
pub fn labels_for_segments(segments: &[YearSegment], config: &LayoutConfig) -> Vec<YearLabel> {
    let number_of_arcs = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(arc_index, segment)| YearLabel {
            year: segment.year,
            position: point_on_arc(0.0, arc_x_offset(arc_index, number_of_arcs, config), config),
        })
        .collect()
}

/// Number of grid arcs needed to cover `total_days` days.
pub fn grid_arcs_for_days(total_days: usize) -> usize {
    total_days.div_ceil(GRID_DAYS_PER_YEAR)
}

/// Grid point for a fractional day index and a fractional weekday column.
///
/// Grid columns are shifted half a column so the lines fall between the
/// weekday columns the day anchors sit on.
fn grid_point(day: f64, weekday: f64, x_offset: f64, config: &LayoutConfig) -> Position3D {
    let t = day / (GRID_DAYS_PER_YEAR - 1) as f64;
    let x = (weekday - CENTER_WEEKDAY - 0.5) * config.day_spread + x_offset;
    point_on_arc(t, x, config)
}

/// Line segments of the spherical guide grid drawn over `number_of_arcs` arcs.
///
/// Each arc gets `latitude_lines - 1` curves running along the year and one
/// rung per week joining neighbouring columns.
pub fn grid_lines(number_of_arcs: usize, latitude_lines: usize, config: &LayoutConfig) -> Vec<GridLine> {
    let columns = latitude_lines.saturating_sub(1);
    let steps = GRID_DAYS_PER_YEAR.div_ceil(7);
    let per_arc = columns * (GRID_DAYS_PER_YEAR - 1) + steps * columns;
    let mut lines = Vec::with_capacity(per_arc * number_of_arcs);

    for arc_index in 0..number_of_arcs {
        let x_offset = arc_x_offset(arc_index, number_of_arcs, config);

        for column in 0..columns {
            let weekday = column as f64 + 0.5;
            for day in 0..GRID_DAYS_PER_YEAR - 1 {
                lines.push(GridLine {
                    from: grid_point(day as f64, weekday, x_offset, config),
                    to: grid_point((day + 1) as f64, weekday, x_offset, config),
                });
            }
        }

        for step in 0..steps {
            let day = (step as f64 + 0.5) / steps as f64 * GRID_DAYS_PER_YEAR as f64;
            if day >= GRID_DAYS_PER_YEAR as f64 {
                continue;
            }
            for column in 0..columns {
                lines.push(GridLine {
                    from: grid_point(day, column as f64, x_offset, config),
                    to: grid_point(day, (column + 1) as f64, x_offset, config),
                });
            }
        }
    }

    lines
}

/// Size and tessellation of the ground plane under the arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundExtent {
    pub width: f64,
    pub depth: f64,
    pub width_segments: u32,
    pub depth_segments: u32,
}

const DEFAULT_GROUND_SIZE: f64 = 1000.0;
const GROUND_MARGIN_ARCS: f64 = 1.5;
const GROUND_DEPTH_RATIO: f64 = 0.8;
const GROUND_CELL_SIZE: f64 = 20.0;
const MIN_GROUND_SEGMENTS: u32 = 50;

fn ground_segments(size: f64) -> u32 {
    ((size / GROUND_CELL_SIZE).round() as u32).max(MIN_GROUND_SEGMENTS)
}

/// Ground plane wide enough for every arc plus a margin on each side.
pub fn ground_extent(segments: &[YearSegment], config: &LayoutConfig) -> GroundExtent {
    let (width, depth) = if segments.is_empty() {
        (DEFAULT_GROUND_SIZE, DEFAULT_GROUND_SIZE)
    } else {
        let spacing = config.arc_spacing();
        let margin = spacing * GROUND_MARGIN_ARCS;
        let width = if segments.len() > 1 {
            (segments.len() - 1) as f64 * spacing + margin * 2.0
        } else {
            config.day_spread * 7.0 + margin * 2.0
        };
        (width, width * GROUND_DEPTH_RATIO)
    };

    GroundExtent {
        width,
        depth,
        width_segments: ground_segments(width),
        depth_segments: ground_segments(depth),
    }
}

pub const DEFAULT_MOUNTAIN_COUNT: usize = 60;
pub const DEFAULT_MOUNTAIN_RADIUS: f64 = 350.0;

/// Scatter `count` mountains on a ring of `radius` around the origin.
///
/// Each mountain sits on the ground at `radius * [0.8, 1.2)` from the centre,
/// with a width scale in `[1, 3.5)`, a height scale in `[1.5, 4.5)` and a
/// yaw in `[0, π)`.
pub fn mountain_instances<R: Rng + ?Sized>(count: usize, radius: f64, rng: &mut R) -> Vec<MountainInstance> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..2.0 * PI);
            let distance = radius * rng.gen_range(0.8..1.2);
            MountainInstance {
                position: Position3D::new(angle.cos() * distance, 0.0, angle.sin() * distance),
                scale_xz: rng.gen_range(1.0..3.5),
                scale_y: rng.gen_range(1.5..4.5),
                yaw: rng.gen_range(0.0..PI),
            }
        })
        .collect()
}
