//! Worked time from a recorded pair of times.
//!
//! Timesheet exports do not reliably print the in time before the out time,
//! so the pair is ordered before the difference is taken.

use chrono::{Duration, NaiveTime};

/// An ordered in/out pair and the time between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedTime {
    /// The earlier time.
    pub in_time: NaiveTime,
    /// The later time.
    pub out_time: NaiveTime,
    /// `out_time - in_time`; never negative.
    pub worked: Duration,
}

/// Orders two recorded times and computes the time between them.
///
/// The earlier time becomes the in time regardless of the order the times
/// were printed in.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_worked_time;
/// use chrono::{Duration, NaiveTime};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let half_six = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
///
/// let result = calculate_worked_time(half_six, nine);
/// assert_eq!(result.in_time, nine);
/// assert_eq!(result.out_time, half_six);
/// assert_eq!(result.worked, Duration::minutes(570));
/// ```
pub fn calculate_worked_time(first: NaiveTime, second: NaiveTime) -> WorkedTime {
    let (in_time, out_time) = if first < second {
        (first, second)
    } else {
        (second, first)
    };

    WorkedTime {
        in_time,
        out_time,
        worked: out_time - in_time,
    }
}
