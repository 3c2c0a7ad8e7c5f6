//! Per-day contribution records and the year segments derived from them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar day of a contribution calendar.
///
/// `weekday` follows the GitHub calendar convention: 0 is Sunday, 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
    pub weekday: u8,
    pub year: i32,
}

impl DayRecord {
    /// Build a record, deriving `weekday` and `year` from the date.
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            weekday: date.weekday().num_days_from_sunday() as u8,
            year: date.year(),
        }
    }

    /// Parse an ISO `YYYY-MM-DD` date and build a record from it.
    pub fn parse(date: &str, count: u32) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        Ok(Self::new(date, count))
    }

    /// Whether this day produces a visible glyph cluster.
    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// A contiguous run of day records belonging to one calendar year.
///
/// Never stored: always recomputed from the record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSegment {
    pub year: i32,
    pub start_index: usize,
    pub count: usize,
}

impl YearSegment {
    /// Global index one past the last record of this segment.
    pub fn end_index(&self) -> usize {
        self.start_index + self.count
    }

    /// Global index range covered by this segment.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start_index..self.end_index()
    }
}
