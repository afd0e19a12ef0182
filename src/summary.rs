//! Monthly summary construction.

use tracing::debug;

use crate::calculation::format_seconds;
use crate::config::DEFAULT_WORK_NATURE;
use crate::models::{EmployeeInfo, SummaryRecord};

/// Builds the summary row for an employee with the default work nature.
///
/// Missing name or code render as empty strings, so an unnamed employee is
/// labelled `" - "`.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::EmployeeInfo;
/// use timesheet_engine::summary::build_summary;
///
/// let employee = EmployeeInfo {
///     name: Some("Asha Rao".to_string()),
///     code: Some("E1042".to_string()),
/// };
///
/// let summary = build_summary(&employee, 5 * 3600 + 40 * 60, 2);
/// assert_eq!(summary.label, "Asha Rao - E1042");
/// assert_eq!(summary.extra_hours_formatted, "05:40");
/// assert_eq!(summary.work_nature, "CoE Work");
/// assert_eq!(summary.remarks, "2 Absent Days");
/// ```
pub fn build_summary(
    employee: &EmployeeInfo,
    total_extra_seconds: i64,
    absent_count: u32,
) -> SummaryRecord {
    build_summary_with_nature(employee, total_extra_seconds, absent_count, DEFAULT_WORK_NATURE)
}

/// Builds the summary row for an employee with a configured work nature.
pub fn build_summary_with_nature(
    employee: &EmployeeInfo,
    total_extra_seconds: i64,
    absent_count: u32,
    work_nature: &str,
) -> SummaryRecord {
    let label = format!(
        "{} - {}",
        employee.name_or_placeholder(),
        employee.code_or_placeholder()
    );
    debug!(label, total_extra_seconds, absent_count, "Built summary row");

    SummaryRecord {
        label,
        extra_hours_formatted: format_seconds(total_extra_seconds),
        work_nature: work_nature.to_string(),
        remarks: format!("{absent_count} Absent Days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: Option<&str>, code: Option<&str>) -> EmployeeInfo {
        EmployeeInfo {
            name: name.map(str::to_string),
            code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let summary = build_summary(&employee(None, None), 0, 0);
        assert_eq!(summary.label, " - ");
        assert_eq!(summary.extra_hours_formatted, "00:00");
        assert_eq!(summary.remarks, "0 Absent Days");
    }

    #[test]
    fn test_missing_code_only() {
        let summary = build_summary(&employee(Some("Asha Rao"), None), 0, 0);
        assert_eq!(summary.label, "Asha Rao - ");
    }

    #[test]
    fn test_remarks_are_not_pluralized_by_count() {
        assert_eq!(build_summary(&employee(None, None), 0, 1).remarks, "1 Absent Days");
    }

    #[test]
    fn test_extra_hours_exceed_a_day() {
        let summary = build_summary(&employee(None, None), 27 * 3600 + 5 * 60 + 59, 0);
        assert_eq!(summary.extra_hours_formatted, "27:05");
    }

    #[test]
    fn test_custom_work_nature() {
        let summary = build_summary_with_nature(&employee(None, None), 0, 0, "Exam Duty");
        assert_eq!(summary.work_nature, "Exam Duty");
    }
}
