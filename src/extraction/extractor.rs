//! Text-to-records extraction.
//!
//! This module walks the lines of a timesheet's text once. It reads the
//! employee header fields and, for every date line, classifies the day from
//! its lookahead context.

use std::collections::HashSet;

use chrono::Duration;
use tracing::{debug, info};

use crate::calculation::{
    aggregate_records, calculate_worked_time, detect_extra_time, standard_duration,
};
use crate::config::{DocumentLayout, PolicyConfig};
use crate::error::ExtractionError;
use crate::models::{AttendanceRecord, AttendanceStatus, EmployeeInfo, ExtractionOutcome};
use crate::source::TextSource;

use super::context::context_window;
use super::rules::{
    EMPLOYEE_CODE_MARKER, EMPLOYEE_NAME_MARKER, absence_marker, date_token, employee_field,
    time_pair, weekday_token,
};

/// Extracts attendance from timesheet text using the default layout.
///
/// Never fails: unrecognized lines are skipped, and a document without any
/// date tokens yields an empty outcome.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::{PolicyConfig, StaffCategory};
/// use timesheet_engine::extraction::extract;
/// use timesheet_engine::models::AttendanceStatus;
///
/// let text = "Employee Name : Asha Rao\n15/06/2025\nMon\n09:00\n18:30\n";
/// let policy = PolicyConfig::for_category(StaffCategory::Male);
///
/// let outcome = extract(text, &policy);
/// assert_eq!(outcome.employee.name.as_deref(), Some("Asha Rao"));
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.records[0].status, AttendanceStatus::Present);
/// assert_eq!(outcome.aggregate.total_extra_seconds, 20 * 60);
/// ```
pub fn extract(text: &str, policy: &PolicyConfig) -> ExtractionOutcome {
    extract_with_layout(text, policy, &DocumentLayout::default())
}

/// Extracts attendance from timesheet text using an explicit layout.
pub fn extract_with_layout(
    text: &str,
    policy: &PolicyConfig,
    layout: &DocumentLayout,
) -> ExtractionOutcome {
    let lines: Vec<&str> = text.split('\n').collect();
    let employee = extract_employee_info(&lines);

    let mut emitted = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let Some(date) = date_token(line, layout.year) else {
            continue;
        };

        let context = context_window(&lines, index, layout.lookahead_lines);
        match classify_day(date, &context, policy, layout) {
            Some(record) => {
                debug!(
                    date,
                    weekday = %record.weekday,
                    status = %record.status,
                    "Classified timesheet day"
                );
                emitted.push(record);
            }
            None => debug!(
                date,
                line = index + 1,
                lookahead_lines = layout.lookahead_lines,
                "Dropped date with no weekday in lookahead window"
            ),
        }
    }

    let emitted_count = emitted.len();
    let records = deduplicate_by_date(emitted);
    let aggregate = aggregate_records(&records, policy);

    info!(
        records = records.len(),
        duplicates = emitted_count - records.len(),
        absent = aggregate.absent_count,
        total_extra_seconds = aggregate.total_extra_seconds,
        earned_leave_days = aggregate.earned_leave_days,
        "Extracted attendance"
    );

    ExtractionOutcome {
        employee,
        records,
        aggregate,
    }
}

/// Reads the document through a [`TextSource`] and extracts attendance.
///
/// Only the text source can fail; extraction itself always succeeds.
pub fn process_document(
    bytes: &[u8],
    source: &dyn TextSource,
    policy: &PolicyConfig,
    layout: &DocumentLayout,
) -> Result<ExtractionOutcome, ExtractionError> {
    let text = source.extract_text(bytes)?;
    Ok(extract_with_layout(&text, policy, layout))
}

/// Reads the employee name and code from the header lines.
///
/// When a field's marker appears on several lines, the last one wins.
pub fn extract_employee_info(lines: &[&str]) -> EmployeeInfo {
    let mut info = EmployeeInfo::default();
    for line in lines {
        if let Some(name) = employee_field(line, EMPLOYEE_NAME_MARKER) {
            info.name = Some(name.to_string());
        }
        if let Some(code) = employee_field(line, EMPLOYEE_CODE_MARKER) {
            info.code = Some(code.to_string());
        }
    }
    info
}

/// Classifies one date from its lookahead context.
///
/// Returns `None` when the context carries no weekday; such dates are
/// treated as noise.
pub fn classify_day(
    date: &str,
    context: &str,
    policy: &PolicyConfig,
    layout: &DocumentLayout,
) -> Option<AttendanceRecord> {
    let weekday = weekday_token(context)?;
    let absent = absence_marker(context, &layout.absence_marker, layout.absence_window_chars);

    let mut record = AttendanceRecord {
        date: date.to_string(),
        weekday,
        in_time: None,
        out_time: None,
        worked: Duration::zero(),
        extra: Duration::zero(),
        status: AttendanceStatus::OffOrHoliday,
    };

    if absent {
        record.status = AttendanceStatus::Absent;
        return Some(record);
    }

    if let Some((first, second)) = time_pair(context) {
        let worked = calculate_worked_time(first, second);
        let detection = detect_extra_time(worked.worked, standard_duration(weekday, policy));

        record.in_time = Some(worked.in_time);
        record.out_time = Some(worked.out_time);
        record.worked = worked.worked;
        record.extra = detection.extra_time;
        record.status = AttendanceStatus::Present;
    }

    Some(record)
}

/// Keeps the first record for each date, preserving encounter order.
pub fn deduplicate_by_date(records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.date.clone()))
        .collect()
}
