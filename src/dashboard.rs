//! Composition root: one store per entity type behind a shared API
//! client, plus the cross-entity operations the dashboard pages invoke.
//!
//! Stores are constructed here and injected wherever needed; there is no
//! process-wide singleton. Mutation ordering within one store is
//! serialized by the store itself.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::model::{
    Attendance, ChecklistStatus, CreateAttendance, LeaveRequest, LeaveStatus, Onboarding, Staff,
};
use crate::report;
use crate::report::{BucketDetail, DateSpan, Granularity, LeaveRollup, OnboardingRollup, TrendRow};
use crate::store::{EntityStore, UpdateOutcome};

/// One entry of a bulk "record attendance" submission.
#[derive(Debug, Clone)]
pub struct AttendanceMark {
    pub staff_id: String,
    pub is_present: bool,
}

impl AttendanceMark {
    pub fn new(staff_id: impl Into<String>, is_present: bool) -> Self {
        Self {
            staff_id: staff_id.into(),
            is_present,
        }
    }
}

/// Outcome of a bulk attendance submission. Successful creates stay
/// applied even when siblings fail; the caller decides what to do with
/// the failed remainder.
#[derive(Debug, Default)]
#[must_use]
pub struct BatchReport {
    pub created: Vec<Attendance>,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub staff_id: String,
    pub error: AppError,
}

impl BatchReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty() && !self.created.is_empty()
    }
}

pub struct Dashboard {
    pub staff: EntityStore<Staff>,
    pub attendance: EntityStore<Attendance>,
    pub leave: EntityStore<LeaveRequest>,
    pub onboarding: EntityStore<Onboarding>,
    enforce_status_flow: bool,
}

impl Dashboard {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Arc::new(ApiClient::new(&config.api_base_url, config.http_timeout)?);
        Ok(Self::with_client(client, config.enforce_status_flow))
    }

    pub fn with_client(client: Arc<ApiClient>, enforce_status_flow: bool) -> Self {
        Self {
            staff: EntityStore::new(client.clone()),
            attendance: EntityStore::new(client.clone()),
            leave: EntityStore::new(client.clone()),
            onboarding: EntityStore::new(client),
            enforce_status_flow,
        }
    }

    /// Fetches all four collections concurrently. Every fetch runs to
    /// completion; collections that succeed stay loaded even when a
    /// sibling fails, and the first failure is returned afterwards.
    pub async fn refresh_all(&self) -> AppResult<()> {
        let (staff, attendance, leave, onboarding) = futures::join!(
            self.staff.fetch_all(),
            self.attendance.fetch_all(),
            self.leave.fetch_all(),
            self.onboarding.fetch_all(),
        );

        let mut first_err = None;
        for outcome in [staff, attendance, leave, onboarding] {
            if let Err(e) = outcome {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => {
                info!(
                    staff = self.staff.len(),
                    attendance = self.attendance.len(),
                    leave = self.leave.len(),
                    onboarding = self.onboarding.len(),
                    "all collections refreshed"
                );
                Ok(())
            }
        }
    }

    /// Bulk "mark N staff for one day": one concurrent create per mark,
    /// awaited as a group. Partial application is the policy; nothing
    /// already created is rolled back when a sibling fails.
    pub async fn record_attendance(&self, date: NaiveDate, marks: &[AttendanceMark]) -> BatchReport {
        let calls = marks.iter().map(|mark| {
            let draft = CreateAttendance {
                staff_id: mark.staff_id.clone(),
                date,
                is_present: mark.is_present,
            };
            async move { (mark.staff_id.clone(), self.attendance.add(&draft).await) }
        });

        let mut batch = BatchReport::default();
        for (staff_id, outcome) in futures::future::join_all(calls).await {
            match outcome {
                Ok(created) => batch.created.push(created),
                Err(error) => {
                    warn!(staff_id = %staff_id, error = %error, "attendance mark failed");
                    batch.failures.push(BatchFailure { staff_id, error });
                }
            }
        }
        batch
    }

    pub async fn approve_leave(&self, id: &str) -> AppResult<UpdateOutcome> {
        self.resolve_leave(id, LeaveStatus::Approved).await
    }

    pub async fn reject_leave(&self, id: &str) -> AppResult<UpdateOutcome> {
        self.resolve_leave(id, LeaveStatus::Rejected).await
    }

    async fn resolve_leave(&self, id: &str, next: LeaveStatus) -> AppResult<UpdateOutcome> {
        let mut request = self.leave.find(id).ok_or_else(|| AppError::NotFound {
            entity: "LeaveRequest",
            id: id.to_string(),
        })?;

        if self.enforce_status_flow && !request.status.can_transition(next) {
            return Err(AppError::InvalidTransition {
                entity: "LeaveRequest",
                from: request.status.to_string(),
                to: next.to_string(),
            });
        }

        request.status = next;
        self.leave.update(request).await
    }

    pub async fn set_onboarding_status(
        &self,
        id: &str,
        status: ChecklistStatus,
    ) -> AppResult<UpdateOutcome> {
        let mut record = self.onboarding.find(id).ok_or_else(|| AppError::NotFound {
            entity: "Onboarding",
            id: id.to_string(),
        })?;

        if self.enforce_status_flow && !record.checklist_status.can_advance(status) {
            return Err(AppError::InvalidTransition {
                entity: "Onboarding",
                from: record.checklist_status.to_string(),
                to: status.to_string(),
            });
        }

        record.checklist_status = status;
        self.onboarding.update(record).await
    }

    /// Deletes the staff record only. Attendance, leave and onboarding
    /// rows referencing the id stay in place with a dangling reference;
    /// the aggregations tolerate unknown ids.
    pub async fn remove_staff(&self, id: &str) -> AppResult<()> {
        self.staff.remove(id).await
    }

    pub fn attendance_trend(&self, today: NaiveDate, granularity: Granularity) -> Vec<TrendRow> {
        report::attendance_trend(
            &self.staff.items(),
            &self.attendance.items(),
            today,
            granularity,
        )
    }

    pub fn attendance_detail(&self, span: DateSpan, filter: Option<&str>) -> BucketDetail {
        report::attendance_detail(&self.staff.items(), &self.attendance.items(), span, filter)
    }

    pub fn leave_rollup(&self) -> LeaveRollup {
        report::leave_status_counts(&self.leave.items())
    }

    pub fn onboarding_rollup(&self) -> OnboardingRollup {
        report::checklist_status_counts(&self.onboarding.items())
    }
}
