//! Drill-down for one trend bucket: which staff were present in the
//! bucket's span and which were not.

use std::collections::HashSet;

use serde::Serialize;

use super::DateSpan;
use crate::model::{Attendance, Staff};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketDetail {
    pub span: DateSpan,
    /// Staff with at least one present mark inside the span, in roster order.
    pub present: Vec<Staff>,
    /// Everyone else, in roster order.
    pub absent: Vec<Staff>,
}

/// Partitions the roster against the attendance records inside `span`.
/// `filter` is an optional case-insensitive substring matched against
/// first name, last name or department before partitioning.
pub fn attendance_detail(
    staff: &[Staff],
    attendance: &[Attendance],
    span: DateSpan,
    filter: Option<&str>,
) -> BucketDetail {
    let present_ids: HashSet<&str> = attendance
        .iter()
        .filter(|record| record.is_present && span.contains(record.date))
        .map(|record| record.staff_id.as_str())
        .collect();

    let needle = filter.map(str::to_lowercase);
    let (present, absent): (Vec<Staff>, Vec<Staff>) = staff
        .iter()
        .filter(|member| matches(member, needle.as_deref()))
        .cloned()
        .partition(|member| present_ids.contains(member.id.as_str()));

    BucketDetail {
        span,
        present,
        absent,
    }
}

fn matches(member: &Staff, needle: Option<&str>) -> bool {
    let Some(needle) = needle else { return true };
    member.first_name.to_lowercase().contains(needle)
        || member.last_name.to_lowercase().contains(needle)
        || member.department.to_lowercase().contains(needle)
}
