//! `HH:MM` rendering of durations.

use chrono::Duration;

/// Renders a duration as `HH:MM`.
///
/// Non-positive durations render as `"00:00"`. Hours are not wrapped at 24
/// and seconds are truncated, never rounded.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(Duration::seconds(3661)), "01:01");
/// assert_eq!(format_duration(Duration::seconds(-5)), "00:00");
/// assert_eq!(format_duration(Duration::hours(31)), "31:00");
/// ```
pub fn format_duration(duration: Duration) -> String {
    format_seconds(duration.num_seconds())
}

/// Renders a number of seconds as `HH:MM`, following [`format_duration`].
pub fn format_seconds(total_seconds: i64) -> String {
    if total_seconds <= 0 {
        return "00:00".to_string();
    }
    format!(
        "{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60
    )
}
