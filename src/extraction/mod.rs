//! Attendance extraction from timesheet text.
//!
//! The [`rules`] module holds the token recognizers. The extractor walks a
//! document's lines, applies the rules to each date's lookahead context and
//! hands the resulting records to the calculation layer for aggregation.

mod context;
mod extractor;
pub mod rules;

pub use context::context_window;
pub use extractor::{
    classify_day, deduplicate_by_date, extract, extract_employee_info, extract_with_layout,
    process_document,
};
