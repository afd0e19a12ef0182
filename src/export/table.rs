//! Exportable tables.

use serde::{Deserialize, Serialize};

use crate::calculation::format_duration;
use crate::error::ExportError;
use crate::extraction::rules::TIME_FORMAT;
use crate::models::{AttendanceRecord, SummaryRecord};

/// Cell shown for a missing in or out time.
pub const MISSING_TIME: &str = "-";

/// A header row plus string rows of the same width.
pub trait Table {
    /// Column headers.
    fn headers(&self) -> Vec<String>;

    /// Data rows, in display order.
    fn rows(&self) -> Vec<Vec<String>>;
}

/// The editable monthly summary table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    records: Vec<SummaryRecord>,
}

impl SummaryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding a single summary row.
    pub fn from_record(record: SummaryRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Appends a row.
    pub fn push(&mut self, record: SummaryRecord) {
        self.records.push(record);
    }

    /// Removes and returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::RowOutOfRange`] if `index` is past the end.
    pub fn delete_row(&mut self, index: usize) -> Result<SummaryRecord, ExportError> {
        if index >= self.records.len() {
            return Err(ExportError::RowOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// The rows currently in the table.
    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if every row has been deleted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Table for SummaryTable {
    fn headers(&self) -> Vec<String> {
        SummaryRecord::HEADERS.iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(SummaryRecord::to_row).collect()
    }
}

/// Per-day attendance detail for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTable {
    records: Vec<AttendanceRecord>,
}

impl AttendanceTable {
    /// Column headers of the attendance export.
    pub const HEADERS: [&'static str; 7] = ["Date", "Day", "In", "Out", "Work", "Extra", "Status"];

    /// Wraps extracted records, keeping their order.
    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// The wrapped records.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}

impl Table for AttendanceTable {
    fn headers(&self) -> Vec<String> {
        Self::HEADERS.iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let time_cell = |time: Option<chrono::NaiveTime>| {
            time.map_or_else(
                || MISSING_TIME.to_string(),
                |t| t.format(TIME_FORMAT).to_string(),
            )
        };

        self.records
            .iter()
            .map(|record| {
                vec![
                    record.date.clone(),
                    record.weekday.to_string(),
                    time_cell(record.in_time),
                    time_cell(record.out_time),
                    format_duration(record.worked),
                    format_duration(record.extra),
                    record.status.to_string(),
                ]
            })
            .collect()
    }
}
