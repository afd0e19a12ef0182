//! Attendance record model and related types.
//!
//! This module defines the per-day [`AttendanceRecord`] produced by the
//! extractor and the [`AttendanceStatus`] classification of each day.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Format of the date token printed on the timesheet.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Classification of a single timesheet day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The day carried an absence marker.
    Absent,
    /// The day carried both an in and an out time.
    Present,
    /// Neither an absence marker nor a time pair was found.
    OffOrHoliday,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::OffOrHoliday => write!(f, "Off/Holiday"),
        }
    }
}

/// One day of attendance read from a timesheet.
///
/// Invariants upheld by the extractor:
/// - `in_time <= out_time` whenever both are present.
/// - `status == Present` implies both times are present.
/// - `worked` and `extra` are zero unless `status == Present`.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{Duration, NaiveTime, Weekday};
///
/// let record = AttendanceRecord {
///     date: "16/06/2025".to_string(),
///     weekday: Weekday::Mon,
///     in_time: NaiveTime::from_hms_opt(9, 0, 0),
///     out_time: NaiveTime::from_hms_opt(18, 30, 0),
///     worked: Duration::minutes(570),
///     extra: Duration::minutes(20),
///     status: AttendanceStatus::Present,
/// };
/// assert!(record.is_present());
/// assert_eq!(record.calendar_date().unwrap().to_string(), "2025-06-16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date token exactly as printed (`DD/MM/YYYY`).
    pub date: String,
    /// The weekday printed next to the date.
    pub weekday: Weekday,
    /// The earlier of the two recorded times.
    pub in_time: Option<NaiveTime>,
    /// The later of the two recorded times.
    pub out_time: Option<NaiveTime>,
    /// Time between in and out, serialized as seconds.
    #[serde(with = "crate::models::duration_secs")]
    pub worked: Duration,
    /// Time worked beyond the applicable standard, serialized as seconds.
    #[serde(with = "crate::models::duration_secs")]
    pub extra: Duration,
    /// The day's classification.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Parses the date token into a calendar date.
    ///
    /// Returns `None` for tokens that match the printed shape but not a real
    /// date, such as `31/02/2025`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Returns true if the day was classified as present.
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }

    /// Returns true if the day was classified as absent.
    pub fn is_absent(&self) -> bool {
        self.status == AttendanceStatus::Absent
    }
}
