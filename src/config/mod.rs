//! Policy configuration for the timesheet engine.
//!
//! The caller selects a [`StaffCategory`], which fixes the standard weekday
//! duration; Saturdays share one standard. Layout assumptions about the
//! exported timesheet text live in [`DocumentLayout`]. Both can be loaded
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::{ConfigLoader, StaffCategory};
//!
//! let config = ConfigLoader::load("./config/policy.yaml").unwrap();
//! let policy = config.policy(StaffCategory::Female);
//! println!("Saturday standard: {} minutes", policy.standard_saturday().num_minutes());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_ABSENCE_MARKER, DEFAULT_ABSENCE_WINDOW_CHARS, DEFAULT_DOCUMENT_YEAR,
    DEFAULT_LOOKAHEAD_LINES, DEFAULT_WORK_NATURE, DocumentLayout, PolicyConfig, StaffCategory,
    Standards, parse_hhmm,
};
