//! Inverse mapping: scene point → nearest day record.
//!
//! Used on every pointer move to resolve the day under the cursor, so the
//! lookup works on precomputed segments and never allocates.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::config::LayoutConfig;
use super::forward::anchors_for_segments;
use crate::models::{ArcPosition, DayRecord, Position3D, YearSegment};

/// Resolve the arc index closest to `x`, clamped to the existing arcs.
fn nearest_arc(x: f64, number_of_arcs: usize, config: &LayoutConfig) -> usize {
    let center = (number_of_arcs / 2) as f64;
    let approx = (x / config.arc_spacing() + center).round();
    approx.clamp(0.0, (number_of_arcs - 1) as f64) as usize
}

/// Resolve the local day index on a segment of `segment_len` days.
fn nearest_local_day(point: &Position3D, segment_len: usize, config: &LayoutConfig) -> usize {
    let angle = point.z.atan2(point.y - config.arc_base_height);
    let t = angle / PI + 0.5;
    let last = (segment_len - 1) as f64;
    (t * last).round().clamp(0.0, last) as usize
}

/// Global index of the day whose anchor is nearest to `point`.
///
/// Returns `None` when there are no segments, when the resolved segment is
/// empty, or when `point` has a non-finite coordinate.
pub fn locate_day(point: Position3D, segments: &[YearSegment], config: &LayoutConfig) -> Option<usize> {
    if segments.is_empty() || !point.is_finite() {
        return None;
    }

    let segment = segments.get(nearest_arc(point.x, segments.len(), config))?;
    if segment.count == 0 {
        return None;
    }

    Some(segment.start_index + nearest_local_day(&point, segment.count, config))
}

/// Recover the day record nearest to `point`, with its global index.
///
/// This is an approximation: points slightly off the arc surface still
/// resolve to the closest plausible day. Repeated calls that land on the same
/// index are not deduplicated here.
pub fn layout_inverse<'a>(
    point: Position3D,
    records: &'a [DayRecord],
    segments: &[YearSegment],
    config: &LayoutConfig,
) -> Option<(usize, &'a DayRecord)> {
    if records.is_empty() {
        return None;
    }
    let index = locate_day(point, segments, config)?;
    records.get(index).map(|record| (index, record))
}

/// Borrowed view bundling a record sequence with its segments and geometry.
///
/// Build it once per data change and query it per pointer event.
#[derive(Debug, Clone, Copy)]
pub struct ArcLayout<'a> {
    records: &'a [DayRecord],
    segments: &'a [YearSegment],
    config: &'a LayoutConfig,
}

impl<'a> ArcLayout<'a> {
    pub fn new(records: &'a [DayRecord], segments: &'a [YearSegment], config: &'a LayoutConfig) -> Self {
        Self {
            records,
            segments,
            config,
        }
    }

    pub fn records(&self) -> &'a [DayRecord] {
        self.records
    }

    pub fn segments(&self) -> &'a [YearSegment] {
        self.segments
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    /// Anchors of all active days.
    pub fn anchors(&self) -> BTreeMap<usize, Position3D> {
        anchors_for_segments(self.records, self.segments, self.config)
    }

    /// Anchors of all active days as a flat list in day order.
    pub fn arc_positions(&self) -> Vec<ArcPosition> {
        self.anchors()
            .into_iter()
            .map(|(day_index, position)| ArcPosition { day_index, position })
            .collect()
    }

    /// Global index of the day nearest to `point`.
    pub fn locate(&self, point: Position3D) -> Option<usize> {
        if self.records.is_empty() {
            return None;
        }
        locate_day(point, self.segments, self.config).filter(|&index| index < self.records.len())
    }

    /// Day record nearest to `point`.
    pub fn day_at(&self, point: Position3D) -> Option<(usize, &'a DayRecord)> {
        layout_inverse(point, self.records, self.segments, self.config)
    }
}
