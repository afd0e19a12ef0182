//! Day type detection and standard duration selection.
//!
//! Saturdays are measured against their own, shorter standard. Every other
//! printed weekday, Sunday included, is measured against the weekday standard.

use chrono::{Duration, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;

/// Represents the type of day for standard-duration selection.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Any day other than Saturday.
    Weekday,
    /// Saturday.
    Saturday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
        }
    }
}

/// Determines the day type for a printed weekday.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{DayType, get_day_type};
/// use chrono::Weekday;
///
/// assert_eq!(get_day_type(Weekday::Sat), DayType::Saturday);
/// assert_eq!(get_day_type(Weekday::Sun), DayType::Weekday);
/// assert_eq!(get_day_type(Weekday::Mon), DayType::Weekday);
/// ```
pub fn get_day_type(weekday: Weekday) -> DayType {
    match weekday {
        Weekday::Sat => DayType::Saturday,
        _ => DayType::Weekday,
    }
}

/// Selects the standard working duration that applies on a weekday.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::standard_duration;
/// use timesheet_engine::config::{PolicyConfig, StaffCategory};
/// use chrono::Weekday;
///
/// let policy = PolicyConfig::for_category(StaffCategory::Male);
/// assert_eq!(standard_duration(Weekday::Sat, &policy), policy.standard_saturday());
/// assert_eq!(standard_duration(Weekday::Fri, &policy), policy.standard_weekday());
/// ```
pub fn standard_duration(weekday: Weekday, policy: &PolicyConfig) -> Duration {
    match get_day_type(weekday) {
        DayType::Saturday => policy.standard_saturday(),
        DayType::Weekday => policy.standard_weekday(),
    }
}
