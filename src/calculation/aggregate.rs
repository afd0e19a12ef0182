//! Document-level counters over a record set.

use crate::config::PolicyConfig;
use crate::models::{AggregateResult, AttendanceRecord};

use super::calculate_earned_leave;

/// Computes the aggregate counters for a deduplicated record set.
///
/// - `total_extra_seconds` sums every record's extra time.
/// - `absent_count` counts absent records.
/// - `earned_leave_days` divides the total by the policy's weekday standard.
pub fn aggregate_records(records: &[AttendanceRecord], policy: &PolicyConfig) -> AggregateResult {
    let total_extra_seconds: i64 = records.iter().map(|r| r.extra.num_seconds()).sum();
    let absent_count = records.iter().filter(|r| r.is_absent()).count() as u32;

    AggregateResult {
        total_extra_seconds,
        absent_count,
        earned_leave_days: calculate_earned_leave(total_extra_seconds, policy.standard_weekday()),
    }
}
