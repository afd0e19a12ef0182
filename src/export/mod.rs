//! Tabular export of summaries and attendance records.
//!
//! A [`Table`] exposes headers and string rows; a [`TableRenderer`] turns any
//! table into bytes. The summary table is also the editable view the user
//! deletes rows from before downloading.

mod renderer;
mod table;

/// File name, without extension, of the downloaded summary.
pub const SUMMARY_FILE_STEM: &str = "CoE_Summary";

pub use renderer::{CsvRenderer, JsonRenderer, TableRenderer};
pub use table::{AttendanceTable, MISSING_TIME, SummaryTable, Table};
