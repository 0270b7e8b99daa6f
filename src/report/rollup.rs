//! Status rollups for leave requests and onboarding checklists.
//! Plain counting over the full collection; no time bucketing.

use serde::Serialize;

use crate::model::{ChecklistStatus, LeaveRequest, LeaveStatus, Onboarding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LeaveRollup {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveRollup {
    pub fn count(&self, status: LeaveStatus) -> usize {
        match status {
            LeaveStatus::Pending => self.pending,
            LeaveStatus::Approved => self.approved,
            LeaveStatus::Rejected => self.rejected,
        }
    }
}

pub fn leave_status_counts(requests: &[LeaveRequest]) -> LeaveRollup {
    let mut rollup = LeaveRollup {
        total: requests.len(),
        ..Default::default()
    };
    for request in requests {
        match request.status {
            LeaveStatus::Pending => rollup.pending += 1,
            LeaveStatus::Approved => rollup.approved += 1,
            LeaveStatus::Rejected => rollup.rejected += 1,
        }
    }
    rollup
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OnboardingRollup {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl OnboardingRollup {
    pub fn count(&self, status: ChecklistStatus) -> usize {
        match status {
            ChecklistStatus::NotStarted => self.not_started,
            ChecklistStatus::InProgress => self.in_progress,
            ChecklistStatus::Completed => self.completed,
        }
    }

    /// Rounded percentage of completed checklists; 0 when there are none.
    pub fn completion_rate(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

pub fn checklist_status_counts(records: &[Onboarding]) -> OnboardingRollup {
    let mut rollup = OnboardingRollup {
        total: records.len(),
        ..Default::default()
    };
    for record in records {
        match record.checklist_status {
            ChecklistStatus::NotStarted => rollup.not_started += 1,
            ChecklistStatus::InProgress => rollup.in_progress += 1,
            ChecklistStatus::Completed => rollup.completed += 1,
        }
    }
    rollup
}
