//! Timesheet attendance engine
//!
//! This crate turns the text of a monthly attendance timesheet into
//! per-day attendance records, document-level counters (extra time, absent
//! days, earned leave) and an editable summary table ready for CSV export.
//!
//! PDF decoding is delegated to a [`source::TextSource`] implementation; the
//! rest of the pipeline works on plain text.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod fingerprint;
pub mod models;
pub mod session;
pub mod source;
pub mod summary;
