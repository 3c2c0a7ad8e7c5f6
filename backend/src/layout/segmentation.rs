//! Year segmentation of an ordered day-record sequence.
//!
//! Segments are the unit both mappings work in: one segment is one arc.

use crate::models::{DayRecord, YearSegment};

/// Problems [`validate_records`] can report for a record sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutInputError {
    #[error("record {index} ({date}) is earlier than the record before it ({previous})")]
    NonMonotonic {
        index: usize,
        previous: chrono::NaiveDate,
        date: chrono::NaiveDate,
    },

    #[error("record {index} repeats date {date}")]
    DuplicateDate { index: usize, date: chrono::NaiveDate },

    #[error("record {index} ({date}) has weekday {found}, expected {expected}")]
    WeekdayMismatch {
        index: usize,
        date: chrono::NaiveDate,
        expected: u8,
        found: u8,
    },

    #[error("record {index} ({date}) has year {found}, expected {expected}")]
    YearMismatch {
        index: usize,
        date: chrono::NaiveDate,
        expected: i32,
        found: i32,
    },
}

/// Partition `records` into contiguous per-year runs.
///
/// A new segment starts only when a record's year is greater than the year of
/// the segment being built. A record whose year is lower (a year regression
/// on unsorted input) is absorbed into the current segment, so the output is
/// always ordered by year and always partitions `0..records.len()`.
pub fn segment_by_year(records: &[DayRecord]) -> Vec<YearSegment> {
    let mut segments: Vec<YearSegment> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match segments.last_mut() {
            Some(current) if record.year <= current.year => current.count += 1,
            _ => segments.push(YearSegment {
                year: record.year,
                start_index: index,
                count: 1,
            }),
        }
    }

    segments
}

/// Report the first way in which `records` breaks the sequence invariants.
///
/// The layout functions never require this to pass; it exists for callers
/// that would rather reject malformed input than lay it out.
pub fn validate_records(records: &[DayRecord]) -> Result<(), LayoutInputError> {
    use chrono::Datelike;

    for (index, record) in records.iter().enumerate() {
        let expected_weekday = record.date.weekday().num_days_from_sunday() as u8;
        if record.weekday != expected_weekday {
            return Err(LayoutInputError::WeekdayMismatch {
                index,
                date: record.date,
                expected: expected_weekday,
                found: record.weekday,
            });
        }
        if record.year != record.date.year() {
            return Err(LayoutInputError::YearMismatch {
                index,
                date: record.date,
                expected: record.date.year(),
                found: record.year,
            });
        }

        if let Some(previous) = index.checked_sub(1).map(|i| &records[i]) {
            if record.date == previous.date {
                return Err(LayoutInputError::DuplicateDate {
                    index,
                    date: record.date,
                });
            }
            if record.date < previous.date {
                return Err(LayoutInputError::NonMonotonic {
                    index,
                    previous: previous.date,
                    date: record.date,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u32) -> DayRecord {
        DayRecord::parse(date, count).unwrap()
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(segment_by_year(&[]).is_empty());
    }

    #[test]
    fn test_segments_follow_year_boundaries() {
        let records = vec![
            day("2022-12-30", 1),
            day("2022-12-31", 0),
            day("2023-01-01", 4),
            day("2023-01-02", 0),
            day("2023-01-03", 2),
            day("2024-01-01", 1),
        ];
        let segments = segment_by_year(&records);

        assert_eq!(
            segments,
            vec![
                YearSegment { year: 2022, start_index: 0, count: 2 },
                YearSegment { year: 2023, start_index: 2, count: 3 },
                YearSegment { year: 2024, start_index: 5, count: 1 },
            ]
        );
        assert_eq!(segments.iter().map(|s| s.count).sum::<usize>(), records.len());
    }

    #[test]
    fn test_year_regression_is_absorbed() {
        let records = vec![
            day("2023-05-01", 1),
            day("2022-05-01", 1),
            day("2023-05-02", 1),
            day("2024-05-01", 1),
        ];
        let segments = segment_by_year(&records);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], YearSegment { year: 2023, start_index: 0, count: 3 });
        assert_eq!(segments[1], YearSegment { year: 2024, start_index: 3, count: 1 });
    }

    #[test]
    fn test_segmentation_is_pure() {
        let records = vec![day("2021-03-01", 1), day("2022-03-01", 2)];
        assert_eq!(segment_by_year(&records), segment_by_year(&records));
    }

    #[test]
    fn test_validate_accepts_sorted_records() {
        let records = vec![day("2023-01-01", 1), day("2023-01-02", 0), day("2023-01-05", 3)];
        assert!(validate_records(&records).is_ok());
        assert!(validate_records(&[]).is_ok());
    }

    #[test]
    fn test_validate_reports_duplicates_and_order() {
        let duplicated = vec![day("2023-01-01", 1), day("2023-01-01", 2)];
        assert!(matches!(
            validate_records(&duplicated),
            Err(LayoutInputError::DuplicateDate { index: 1, .. })
        ));

        let unsorted = vec![day("2023-01-02", 1), day("2023-01-01", 2)];
        assert!(matches!(
            validate_records(&unsorted),
            Err(LayoutInputError::NonMonotonic { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_reports_inconsistent_fields() {
        let mut wrong_weekday = day("2023-01-01", 1);
        wrong_weekday.weekday = 3;
        let err = validate_records(&[wrong_weekday]).unwrap_err();
        assert_eq!(
            err,
            LayoutInputError::WeekdayMismatch {
                index: 0,
                date: wrong_weekday.date,
                expected: 0,
                found: 3,
            }
        );

        let mut wrong_year = day("2023-01-01", 1);
        wrong_year.year = 2022;
        assert!(matches!(
            validate_records(&[wrong_year]),
            Err(LayoutInputError::YearMismatch { expected: 2023, found: 2022, .. })
        ));
    }
}
