//! Time-accounting logic for the timesheet engine.
//!
//! This module contains the rules applied to each extracted day and to the
//! document as a whole: ordering a recorded time pair into worked time,
//! selecting the standard duration by day type, splitting off extra time,
//! converting accumulated extra time into earned leave, and rendering
//! durations as `HH:MM`.

mod aggregate;
mod day_type;
mod duration_format;
mod earned_leave;
mod extra_time;
mod worked_time;

pub use aggregate::aggregate_records;
pub use day_type::{DayType, get_day_type, standard_duration};
pub use duration_format::{format_duration, format_seconds};
pub use earned_leave::calculate_earned_leave;
pub use extra_time::{ExtraTimeDetection, detect_extra_time};
pub use worked_time::{WorkedTime, calculate_worked_time};
