//! Extra time detection functionality.
//!
//! A day's extra time is whatever part of its worked time lies beyond the
//! applicable standard duration.

use chrono::Duration;
use tracing::trace;

/// The result of comparing a day's worked time against its standard.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::ExtraTimeDetection;
/// use chrono::Duration;
///
/// let detection = ExtraTimeDetection {
///     extra_time: Duration::minutes(20),
/// };
/// assert!(detection.has_extra());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraTimeDetection {
    /// Worked time beyond the standard (zero unless strictly exceeded).
    pub extra_time: Duration,
}

impl ExtraTimeDetection {
    /// Returns true if any extra time was worked.
    pub fn has_extra(&self) -> bool {
        self.extra_time > Duration::zero()
    }
}

/// Detects whether worked time exceeds the standard duration.
///
/// Extra time is only produced when `worked` is strictly greater than
/// `standard`.
///
/// # Examples
///
/// ## Worked time above the standard
///
/// ```
/// use timesheet_engine::calculation::detect_extra_time;
/// use chrono::Duration;
///
/// let result = detect_extra_time(Duration::minutes(570), Duration::minutes(550));
/// assert_eq!(result.extra_time, Duration::minutes(20));
/// ```
///
/// ## Worked time at the standard
///
/// ```
/// use timesheet_engine::calculation::detect_extra_time;
/// use chrono::Duration;
///
/// let result = detect_extra_time(Duration::minutes(550), Duration::minutes(550));
/// assert_eq!(result.extra_time, Duration::zero());
/// ```
pub fn detect_extra_time(worked: Duration, standard: Duration) -> ExtraTimeDetection {
    let extra_time = if worked > standard {
        worked - standard
    } else {
        Duration::zero()
    };
    let detection = ExtraTimeDetection { extra_time };

    trace!(
        worked_minutes = worked.num_minutes(),
        standard_minutes = standard.num_minutes(),
        extra_minutes = detection.extra_time.num_minutes(),
        "Compared worked time against standard"
    );

    detection
}
