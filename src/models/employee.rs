//! Employee identity as printed on a timesheet.
//!
//! This module defines [`EmployeeInfo`], the name and code pulled from the
//! timesheet header lines.

use serde::{Deserialize, Serialize};

/// Represents the employee a timesheet belongs to.
///
/// Both fields are optional: exported timesheets do not always carry the
/// header lines, and consumers must render a missing field as an empty
/// placeholder.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::EmployeeInfo;
///
/// let info = EmployeeInfo {
///     name: Some("Asha Rao".to_string()),
///     code: None,
/// };
/// assert_eq!(info.name_or_placeholder(), "Asha Rao");
/// assert_eq!(info.code_or_placeholder(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The employee's name, if the timesheet carried one.
    #[serde(default)]
    pub name: Option<String>,
    /// The employee's code, if the timesheet carried one.
    #[serde(default)]
    pub code: Option<String>,
}

impl EmployeeInfo {
    /// Returns the name, or an empty string when absent.
    pub fn name_or_placeholder(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns the code, or an empty string when absent.
    pub fn code_or_placeholder(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }

    /// Returns true if neither field was found.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none()
    }
}
