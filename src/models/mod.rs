//! Core data models for the timesheet engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod duration_secs;
mod employee;
mod outcome;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus, DATE_FORMAT};
pub use employee::EmployeeInfo;
pub use outcome::{AggregateResult, ExtractionOutcome};
pub use summary::SummaryRecord;
