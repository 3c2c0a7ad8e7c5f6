//! Forward mapping: day record → position on its year arc.
//!
//! Each year is laid out on a vertical half-circle of radius
//! [`LayoutConfig::arc_radius`]. The first day of the year sits at one end of
//! the half-circle, the last day at the other and the middle of the year at
//! the apex. Weekdays spread the days horizontally into seven columns and
//! consecutive years are placed side by side, centred around `x = 0`.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use rand::Rng;

use super::config::LayoutConfig;
use super::segmentation::segment_by_year;
use crate::models::{DayRecord, Position3D, StarInstance, YearSegment};

/// Weekday column that sits on the arc's centre line.
pub const CENTER_WEEKDAY: f64 = 3.0;

/// Horizontal offset of the arc at `arc_index` among `number_of_arcs` arcs.
///
/// Arcs are centred on `floor(number_of_arcs / 2)`, so with an even count the
/// set leans towards negative `x`.
pub fn arc_x_offset(arc_index: usize, number_of_arcs: usize, config: &LayoutConfig) -> f64 {
    let center = (number_of_arcs / 2) as f64;
    (arc_index as f64 - center) * config.arc_spacing()
}

/// Normalized position of a day along its arc, in `[0, 1]`.
pub fn arc_parameter(local_index: usize, segment_len: usize) -> f64 {
    if segment_len > 1 {
        local_index as f64 / (segment_len - 1) as f64
    } else {
        0.0
    }
}

/// Point on the arc at parameter `t`, on the column at horizontal position `x`.
pub fn point_on_arc(t: f64, x: f64, config: &LayoutConfig) -> Position3D {
    let angle = (t - 0.5) * PI;
    let radius = config.arc_radius();
    Position3D::new(
        x,
        config.arc_base_height + radius * angle.cos(),
        radius * angle.sin(),
    )
}

/// Anchor of the day at `local_index` of `segment`, on the arc offset by `x_offset`.
pub fn day_anchor(
    record: &DayRecord,
    local_index: usize,
    segment: &YearSegment,
    x_offset: f64,
    config: &LayoutConfig,
) -> Position3D {
    let t = arc_parameter(local_index, segment.count);
    let x = (record.weekday as f64 - CENTER_WEEKDAY) * config.day_spread + x_offset;
    point_on_arc(t, x, config)
}

/// Anchors for every active day, computed against precomputed segments.
pub fn anchors_for_segments(
    records: &[DayRecord],
    segments: &[YearSegment],
    config: &LayoutConfig,
) -> BTreeMap<usize, Position3D> {
    let mut anchors = BTreeMap::new();
    let number_of_arcs = segments.len();

    for (arc_index, segment) in segments.iter().enumerate() {
        let x_offset = arc_x_offset(arc_index, number_of_arcs, config);

        for (local_index, global_index) in segment.range().enumerate() {
            let Some(record) = records.get(global_index) else {
                break;
            };
            if !record.is_active() {
                continue;
            }
            anchors.insert(
                global_index,
                day_anchor(record, local_index, segment, x_offset, config),
            );
        }
    }

    anchors
}

/// Map every day with at least one contribution to its anchor position.
///
/// Keys are global indices into `records`. Zero-count days have no entry.
/// The result is fully deterministic for a given input.
pub fn layout_forward(records: &[DayRecord], config: &LayoutConfig) -> BTreeMap<usize, Position3D> {
    let segments = segment_by_year(records);
    anchors_for_segments(records, &segments, config)
}

/// Radius of the sphere a day's units are scattered in.
pub fn scatter_radius(count: u32, config: &LayoutConfig) -> f64 {
    (count as f64 + 1.0).ln() * config.scatter_factor
}

/// Random displacement inside a sphere of `radius`.
///
/// The direction comes from a normalized point of the enclosing cube and the
/// magnitude is uniform in `[0, radius)`.
fn random_offset<R: Rng + ?Sized>(radius: f64, rng: &mut R) -> Position3D {
    if radius <= 0.0 {
        return Position3D::ORIGIN;
    }

    let direction = Position3D::new(
        rng.gen_range(-radius..radius),
        rng.gen_range(-radius..radius),
        rng.gen_range(-radius..radius),
    );
    let length = direction.length();
    if length == 0.0 {
        return Position3D::ORIGIN;
    }

    let magnitude = rng.gen::<f64>() * radius;
    direction.scale(magnitude / length)
}

/// Expand every active day into `count` star instances around its anchor.
///
/// Positions and scales are random; pass a seeded RNG for reproducible output.
/// Production stops once [`LayoutConfig::max_stars`] instances exist.
pub fn scatter_stars<R: Rng + ?Sized>(
    records: &[DayRecord],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<StarInstance> {
    let anchors = layout_forward(records, config);
    let total: usize = anchors
        .keys()
        .map(|&index| records[index].count as usize)
        .sum();
    let mut stars = Vec::with_capacity(total.min(config.max_stars));

    'days: for (&day_index, &anchor) in &anchors {
        let count = records[day_index].count;
        let radius = scatter_radius(count, config);

        for _ in 0..count {
            if stars.len() >= config.max_stars {
                log::warn!(
                    "star budget of {} reached, dropping remaining units from day {}",
                    config.max_stars,
                    day_index
                );
                break 'days;
            }

            let scale = config.base_star_scale
                * rng.gen_range(config.star_scale_min..config.star_scale_max);
            stars.push(StarInstance {
                day_index,
                position: anchor + random_offset(radius, rng),
                scale,
            });
        }
    }

    stars
}

const TWINKLE_SPEED: f64 = 0.5;
const TWINKLE_AMOUNT: f64 = 0.3;
const PHASE_SHIFT_FACTOR: f64 = 0.1;

/// Brightness multiplier of a day's stars at `time` seconds.
///
/// Days pulse out of phase with their neighbours; the factor stays within
/// `[1 - 2 * amount, 1]`.
pub fn twinkle_intensity(time: f64, day_index: usize) -> f64 {
    (1.0 - TWINKLE_AMOUNT)
        + (time * TWINKLE_SPEED + day_index as f64 * PHASE_SHIFT_FACTOR).sin() * TWINKLE_AMOUNT
}
