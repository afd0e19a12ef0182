//! Lookahead context windows.
//!
//! The timesheet export prints a day's weekday, times and absence marker on
//! the lines following its date. The context for a date is that date line
//! plus the next lines, joined into one string.

/// Joins `lookahead_lines` lines starting at `index` with single spaces.
///
/// The window is cut short at the end of the document. A lookahead of zero is
/// treated as one (the date line alone).
///
/// # Example
///
/// ```
/// use timesheet_engine::extraction::context_window;
///
/// let lines = ["16/06/2025", "Mon", "09:00", "18:30"];
/// assert_eq!(context_window(&lines, 0, 3), "16/06/2025 Mon 09:00");
/// assert_eq!(context_window(&lines, 2, 10), "09:00 18:30");
/// ```
pub fn context_window(lines: &[&str], index: usize, lookahead_lines: usize) -> String {
    let end = index
        .saturating_add(lookahead_lines.max(1))
        .min(lines.len());
    lines
        .get(index..end)
        .map(|window| window.join(" "))
        .unwrap_or_default()
}
