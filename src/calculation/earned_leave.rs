//! Earned leave from accumulated extra time.
//!
//! Every full standard weekday's worth of extra time earns one day of leave.

use chrono::Duration;

/// Computes whole leave days earned by accumulated extra time.
///
/// Returns `floor(total_extra_seconds / standard_weekday)`. A non-positive
/// standard or a non-positive total earns nothing.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_earned_leave;
/// use chrono::Duration;
///
/// let standard = Duration::minutes(550); // 33000 seconds
/// assert_eq!(calculate_earned_leave(66_000, standard), 2);
/// assert_eq!(calculate_earned_leave(65_999, standard), 1);
/// ```
pub fn calculate_earned_leave(total_extra_seconds: i64, standard_weekday: Duration) -> i64 {
    let standard_seconds = standard_weekday.num_seconds();
    if standard_seconds <= 0 || total_extra_seconds <= 0 {
        return 0;
    }
    total_extra_seconds.div_euclid(standard_seconds)
}
