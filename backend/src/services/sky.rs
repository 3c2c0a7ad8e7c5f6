//! Sky layout assembly: everything the client needs to place one user's
//! contribution sky, computed in a single pass over the records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::layout::{
    anchors_for_segments, ground_extent, labels_for_segments, validate_records, GroundExtent,
    LayoutConfig,
};
use crate::models::{DayRecord, Position3D, YearLabel, YearSegment};

/// Anchor of one active day with the record fields a tooltip needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub day_index: usize,
    pub date: NaiveDate,
    pub count: u32,
    pub position: Position3D,
}

/// Sky layout for a record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyLayout {
    pub total_days: usize,
    pub active_days: usize,
    pub total_contributions: u64,
    pub arc_radius: f64,
    pub arc_spacing: f64,
    pub segments: Vec<YearSegment>,
    pub anchors: Vec<AnchorPoint>,
    pub year_labels: Vec<YearLabel>,
    pub ground: GroundExtent,
    /// Set when the records break the ordering invariants; the layout is
    /// still computed but may place days on the wrong arc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_warning: Option<String>,
}

/// Compute the sky layout from records and their precomputed segments.
pub fn compute_sky_layout(
    records: &[DayRecord],
    segments: &[YearSegment],
    config: &LayoutConfig,
) -> SkyLayout {
    let input_warning = validate_records(records).err().map(|e| {
        log::warn!("laying out malformed contribution records: {}", e);
        e.to_string()
    });

    let anchors: Vec<AnchorPoint> = anchors_for_segments(records, segments, config)
        .into_iter()
        .map(|(day_index, position)| {
            let record = &records[day_index];
            AnchorPoint {
                day_index,
                date: record.date,
                count: record.count,
                position,
            }
        })
        .collect();

    SkyLayout {
        total_days: records.len(),
        active_days: anchors.len(),
        total_contributions: records.iter().map(|r| u64::from(r.count)).sum(),
        arc_radius: config.arc_radius(),
        arc_spacing: config.arc_spacing(),
        segments: segments.to_vec(),
        anchors,
        year_labels: labels_for_segments(segments, config),
        ground: ground_extent(segments, config),
        input_warning,
    }
}
