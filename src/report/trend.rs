//! Attendance trend bucketing.
//!
//! One row per bucket, oldest first: the last 7 days, the last 4
//! Monday-aligned weeks, or the last 6 calendar months relative to a
//! reference date. Presence is a set union of staff ids over the
//! bucket's span, so duplicate records for one member count once.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::DateSpan;
use crate::model::{Attendance, Staff};

pub const DAILY_BUCKETS: usize = 7;
pub const WEEKLY_BUCKETS: usize = 4;
pub const MONTHLY_BUCKETS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    /// Stable bucket key: `2024-05-15`, `2024-W17` or `2024-05`.
    pub key: String,
    /// Human label: `Wed, May 15`, `Week 17 2024` or `May 2024`.
    pub label: String,
    pub granularity: Granularity,
    /// Inclusive date range of the bucket, for drill-down lookups.
    pub span: DateSpan,
    pub present: usize,
    pub absent: usize,
    /// Rounded integer percentage; 0 when there is no staff at all.
    pub rate: u8,
    /// Set only on the daily row matching the reference date.
    pub is_today: bool,
}

pub fn attendance_trend(
    staff: &[Staff],
    attendance: &[Attendance],
    today: NaiveDate,
    granularity: Granularity,
) -> Vec<TrendRow> {
    match granularity {
        Granularity::Daily => daily_rows(staff, attendance, today),
        Granularity::Weekly => weekly_rows(staff, attendance, today),
        Granularity::Monthly => monthly_rows(staff, attendance, today),
    }
}

fn daily_rows(staff: &[Staff], attendance: &[Attendance], today: NaiveDate) -> Vec<TrendRow> {
    let total = staff.len();
    (0..DAILY_BUCKETS)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back as i64);
            let span = DateSpan::single(day);
            let (present, absent, rate) = presence_in(attendance, total, span);
            TrendRow {
                key: day.format("%Y-%m-%d").to_string(),
                label: day.format("%a, %b %-d").to_string(),
                granularity: Granularity::Daily,
                span,
                present,
                absent,
                rate,
                is_today: day == today,
            }
        })
        .collect()
}

fn weekly_rows(staff: &[Staff], attendance: &[Attendance], today: NaiveDate) -> Vec<TrendRow> {
    let total = staff.len();
    let monday = monday_of(today);
    (0..WEEKLY_BUCKETS)
        .rev()
        .map(|back| {
            let start = monday - Duration::weeks(back as i64);
            let span = DateSpan::new(start, start + Duration::days(6));
            let (present, absent, rate) = presence_in(attendance, total, span);
            let week = week_of_year(start);
            TrendRow {
                key: format!("{}-W{:02}", start.year(), week),
                label: format!("Week {:02} {}", week, start.year()),
                granularity: Granularity::Weekly,
                span,
                present,
                absent,
                rate,
                is_today: false,
            }
        })
        .collect()
}

fn monthly_rows(staff: &[Staff], attendance: &[Attendance], today: NaiveDate) -> Vec<TrendRow> {
    let total = staff.len();
    (0..MONTHLY_BUCKETS)
        .rev()
        .map(|back| {
            let (year, month) = shift_month(today.year(), today.month(), back as i32);
            let span = month_span(year, month);
            let (present, absent, rate) = presence_in(attendance, total, span);
            TrendRow {
                key: format!("{:04}-{:02}", year, month),
                label: span.start.format("%B %Y").to_string(),
                granularity: Granularity::Monthly,
                span,
                present,
                absent,
                rate,
                is_today: false,
            }
        })
        .collect()
}

fn presence_in(attendance: &[Attendance], total_staff: usize, span: DateSpan) -> (usize, usize, u8) {
    let mut present_ids: HashSet<&str> = HashSet::new();
    for record in attendance {
        if record.is_present && span.contains(record.date) {
            present_ids.insert(record.staff_id.as_str());
        }
    }

    // Dangling staff ids can push the union past the roster; cap it so
    // absent never underflows.
    let present = present_ids.len().min(total_staff);
    let absent = total_staff - present;
    let rate = if total_staff == 0 {
        0
    } else {
        ((present as f64 / total_staff as f64) * 100.0).round() as u8
    };
    (present, absent, rate)
}

fn monday_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// Fixed epoch week rule: days since Jan 1, offset by Jan 1's weekday
/// (Sunday = 0) plus one, ceiling-divided into weeks. Not ISO 8601 —
/// year-boundary weeks number differently.
fn week_of_year(day: NaiveDate) -> i64 {
    let jan1 = NaiveDate::from_ymd_opt(day.year(), 1, 1).expect("Jan 1 is a valid date");
    let days = day.signed_duration_since(jan1).num_days();
    let offset = jan1.weekday().num_days_from_sunday() as i64;
    ((days + offset + 1) as u64).div_ceil(7) as i64
}

/// (year, month) shifted `back` months into the past.
fn shift_month(year: i32, month: u32, back: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 - back;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

fn month_span(year: i32, month: u32) -> DateSpan {
    let start = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is valid");
    let (next_year, next_month) = shift_month(year, month, -1);
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("first of month is valid")
        - Duration::days(1);
    DateSpan::new(start, end)
}
