//! Monthly summary row model.

use serde::{Deserialize, Serialize};

/// One export row summarizing a timesheet.
///
/// Column order matches [`SummaryRecord::HEADERS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// `"{name} - {code}"`.
    pub label: String,
    /// Total extra time as `HH:MM`.
    pub extra_hours_formatted: String,
    /// The nature of the work the extra time was spent on.
    pub work_nature: String,
    /// `"{n} Absent Days"`.
    pub remarks: String,
}

impl SummaryRecord {
    /// Column headers of the exported summary.
    pub const HEADERS: [&'static str; 4] = [
        "CoE Faculty Name",
        "Extra working hours",
        "Work Nature",
        "Remarks",
    ];

    /// Returns the cells of this record in header order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.extra_hours_formatted.clone(),
            self.work_nature.clone(),
            self.remarks.clone(),
        ]
    }
}
