//! Calendar heatmap for the 2D HUD: one cell per day, coloured by intensity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DayRecord;

/// Cell colours from the empty level up to the busiest.
pub const LEVEL_COLORS: [&str; 5] = [
    "#d1d5db", // Gray - no contributions
    "#bbf7d0", // Level 1
    "#4ade80", // Level 2
    "#16a34a", // Level 3
    "#166534", // Level 4
];

/// One day of the heatmap grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
    pub color: String,
    pub title: String,
}

/// Heatmap laid out column-major, seven rows per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarHeatmap {
    /// Empty cells placed before the first day so it lands on its weekday row.
    pub leading_blanks: u8,
    pub cells: Vec<HeatmapCell>,
    pub total_contributions: u64,
    pub max_count: u32,
}

/// Intensity bucket of a day's contribution count.
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        _ => 4,
    }
}

pub fn level_color(level: u8) -> &'static str {
    LEVEL_COLORS[usize::from(level).min(LEVEL_COLORS.len() - 1)]
}

/// Build the HUD heatmap for a record sequence.
pub fn build_heatmap(records: &[DayRecord]) -> CalendarHeatmap {
    let cells = records
        .iter()
        .map(|record| {
            let level = intensity_level(record.count);
            HeatmapCell {
                date: record.date,
                count: record.count,
                level,
                color: level_color(level).to_string(),
                title: format!("{}: {} contributions", record.date, record.count),
            }
        })
        .collect();

    CalendarHeatmap {
        leading_blanks: records.first().map_or(0, |first| first.weekday),
        cells,
        total_contributions: records.iter().map(|r| u64::from(r.count)).sum(),
        max_count: records.iter().map(|r| r.count).max().unwrap_or(0),
    }
}
