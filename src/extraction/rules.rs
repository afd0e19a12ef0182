//! Named extraction rules.
//!
//! Each rule recognizes one kind of token in a timesheet line or in a day's
//! lookahead context. Rules never fail: text they do not recognize yields
//! `None` (or `false`), and the caller decides how to degrade.

use std::sync::LazyLock;

use chrono::{NaiveTime, Weekday};
use regex::Regex;

/// Marker of the header line carrying the employee's name.
pub const EMPLOYEE_NAME_MARKER: &str = "Employee Name";

/// Marker of the header line carrying the employee's code.
pub const EMPLOYEE_CODE_MARKER: &str = "Employee Code";

/// Format of each time in a recorded pair.
pub const TIME_FORMAT: &str = "%H:%M";

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}/\d{2}/(\d{4})").unwrap());

static WEEKDAY_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Mon|Tue|Wed|Thu|Fri|Sat|Sun").unwrap());

static TIME_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}:\d{2})\s+(\d{2}:\d{2})").unwrap());

/// Reads a header field from a line containing `marker`.
///
/// The value is whatever follows the last colon on the line, trimmed. A line
/// with the marker but no colon yields the whole trimmed line.
///
/// # Example
///
/// ```
/// use timesheet_engine::extraction::rules::{EMPLOYEE_NAME_MARKER, employee_field};
///
/// assert_eq!(
///     employee_field("Employee Name : Asha Rao ", EMPLOYEE_NAME_MARKER),
///     Some("Asha Rao")
/// );
/// assert_eq!(employee_field("Department : Physics", EMPLOYEE_NAME_MARKER), None);
/// ```
pub fn employee_field<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if !line.contains(marker) {
        return None;
    }
    line.rsplit(':').next().map(str::trim)
}

/// Finds the leftmost `DD/MM/YYYY` token on a line whose year is `year`.
///
/// Day and month are only checked for being two digits; `99/99/2025` is a
/// token. Tokens for other years are skipped, even when they overlap a token
/// for `year`.
///
/// # Example
///
/// ```
/// use timesheet_engine::extraction::rules::date_token;
///
/// assert_eq!(date_token("Date: 16/06/2025", 2025), Some("16/06/2025"));
/// assert_eq!(date_token("Date: 16/06/2024", 2025), None);
/// ```
pub fn date_token(line: &str, year: i32) -> Option<&str> {
    let year = format!("{year:04}");
    let mut start = 0;

    while let Some(captures) = DATE_SHAPE.captures_at(line, start) {
        let token = captures.get(0)?;
        if captures.get(1).is_some_and(|y| y.as_str() == year) {
            return Some(token.as_str());
        }
        let step = line[token.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        start = token.start() + step;
    }

    None
}

/// Finds the leftmost three-letter weekday abbreviation in a context.
///
/// Matching is by substring: `Monday` and `Saturday` are recognized as
/// `Mon` and `Sat`.
///
/// # Example
///
/// ```
/// use timesheet_engine::extraction::rules::weekday_token;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_token("16/06/2025 Mon 09:00"), Some(Weekday::Mon));
/// assert_eq!(weekday_token("16/06/2025 09:00"), None);
/// ```
pub fn weekday_token(context: &str) -> Option<Weekday> {
    WEEKDAY_ABBREVIATION
        .find(context)
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns true if `marker` appears within the first `window_chars`
/// characters of the context.
///
/// An empty marker never matches.
///
/// # Example
///
/// ```
/// use timesheet_engine::extraction::rules::absence_marker;
///
/// assert!(absence_marker("17/06/2025 Tue AB", "AB", 50));
/// assert!(!absence_marker("17/06/2025 Tue AB", "AB", 10));
/// ```
pub fn absence_marker(context: &str, marker: &str, window_chars: usize) -> bool {
    if marker.is_empty() {
        return false;
    }
    let end = context
        .char_indices()
        .nth(window_chars)
        .map_or(context.len(), |(i, _)| i);
    context[..end].contains(marker)
}

/// Finds the leftmost `HH:MM <whitespace> HH:MM` pair in a context.
///
/// Times are returned in the order printed. If the leftmost pair does not
/// parse as two valid times of day (e.g. `25:99`), no pair is returned.
///
/// # Example
///
/// ```
/// use timesheet_engine::extraction::rules::time_pair;
/// use chrono::NaiveTime;
///
/// let (first, second) = time_pair("Mon 18:30   09:00").unwrap();
/// assert_eq!(first, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
/// assert_eq!(second, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
/// assert!(time_pair("Mon 09:00").is_none());
/// ```
pub fn time_pair(context: &str) -> Option<(NaiveTime, NaiveTime)> {
    let captures = TIME_PAIR.captures(context)?;
    let first = NaiveTime::parse_from_str(captures.get(1)?.as_str(), TIME_FORMAT).ok()?;
    let second = NaiveTime::parse_from_str(captures.get(2)?.as_str(), TIME_FORMAT).ok()?;
    Some((first, second))
}
