use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One mark per staff member per calendar day. The (staffId, date)
/// uniqueness is assumed upstream, never enforced here; reporting
/// unions staff ids so duplicates cannot double-count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub staff_id: String,
    pub date: NaiveDate,
    pub is_present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendance {
    pub staff_id: String,
    pub date: NaiveDate,
    pub is_present: bool,
}
