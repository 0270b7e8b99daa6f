use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Checklist progression is a UI convention: the wire accepts any value,
/// and enforcement only happens when the dashboard is configured for it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum ChecklistStatus {
    #[serde(rename = "Not Started")]
    #[strum(serialize = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
}

impl ChecklistStatus {
    /// Monotonic progression: forward moves (skips included), never back.
    pub fn can_advance(self, next: ChecklistStatus) -> bool {
        next > self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    pub id: String,
    pub staff_id: String,
    pub start_date: NaiveDate,
    pub checklist_status: ChecklistStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOnboarding {
    pub staff_id: String,
    pub start_date: NaiveDate,
    pub checklist_status: ChecklistStatus,
}

impl CreateOnboarding {
    pub fn new(staff_id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            staff_id: staff_id.into(),
            start_date,
            checklist_status: ChecklistStatus::NotStarted,
        }
    }
}
