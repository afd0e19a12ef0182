//! Extraction outcome models.
//!
//! This module contains the [`AggregateResult`] counters derived from a
//! document's records and the [`ExtractionOutcome`] bundling everything the
//! extractor returns.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, EmployeeInfo};

/// Counters derived from the deduplicated record set of one document.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::AggregateResult;
///
/// let aggregate = AggregateResult {
///     total_extra_seconds: 66_000,
///     absent_count: 2,
///     earned_leave_days: 2,
/// };
/// assert_eq!(aggregate.total_extra().num_minutes(), 1100);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of every record's extra time, in seconds.
    pub total_extra_seconds: i64,
    /// Number of records classified as absent.
    pub absent_count: u32,
    /// Whole standard weekdays covered by the accumulated extra time.
    pub earned_leave_days: i64,
}

impl AggregateResult {
    /// Returns the total extra time as a duration.
    pub fn total_extra(&self) -> Duration {
        Duration::seconds(self.total_extra_seconds)
    }
}

/// Everything extracted from one timesheet document.
///
/// An outcome with no records is valid; callers should present it as
/// "no data" rather than as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// The employee the timesheet belongs to.
    pub employee: EmployeeInfo,
    /// One record per unique date, in the order first encountered.
    pub records: Vec<AttendanceRecord>,
    /// Counters over `records`.
    pub aggregate: AggregateResult,
}

impl ExtractionOutcome {
    /// Returns true if no attendance records were found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Splits the outcome into its parts.
    pub fn into_parts(self) -> (EmployeeInfo, Vec<AttendanceRecord>, AggregateResult) {
        (self.employee, self.records, self.aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outcome_is_empty() {
        let outcome = ExtractionOutcome::default();
        assert!(outcome.is_empty());
        assert_eq!(outcome.aggregate, AggregateResult::default());
    }

    #[test]
    fn test_total_extra_duration() {
        let aggregate = AggregateResult {
            total_extra_seconds: 3_661,
            absent_count: 0,
            earned_leave_days: 0,
        };
        assert_eq!(aggregate.total_extra(), Duration::seconds(3_661));
    }

    #[test]
    fn test_into_parts() {
        let outcome = ExtractionOutcome {
            employee: EmployeeInfo {
                name: Some("Asha Rao".to_string()),
                code: None,
            },
            records: vec![],
            aggregate: AggregateResult {
                total_extra_seconds: 60,
                absent_count: 1,
                earned_leave_days: 0,
            },
        };

        let (employee, records, aggregate) = outcome.into_parts();
        assert_eq!(employee.name.as_deref(), Some("Asha Rao"));
        assert!(records.is_empty());
        assert_eq!(aggregate.absent_count, 1);
    }

    #[test]
    fn test_aggregate_serialization() {
        let aggregate = AggregateResult {
            total_extra_seconds: 1_200,
            absent_count: 3,
            earned_leave_days: 0,
        };
        let json = serde_json::to_string(&aggregate).unwrap();
        assert!(json.contains("\"total_extra_seconds\":1200"));
        assert!(json.contains("\"absent_count\":3"));
        assert!(json.contains("\"earned_leave_days\":0"));
    }
}
