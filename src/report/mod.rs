//! Pure reporting over entity snapshots: no I/O, no store access.
//! Every function takes slices and returns derived rows; callers decide
//! where the data comes from and where the result goes.

pub mod detail;
pub mod export;
pub mod rollup;
pub mod trend;

pub use detail::{BucketDetail, attendance_detail};
pub use export::trend_to_csv;
pub use rollup::{LeaveRollup, OnboardingRollup, checklist_status_counts, leave_status_counts};
pub use trend::{Granularity, TrendRow, attendance_trend};

use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;

/// Inclusive calendar-day range of one report bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[display(fmt = "{}..{}", start, end)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}
