pub mod attendance;
pub mod leave_request;
pub mod onboarding;
pub mod staff;

pub use attendance::{Attendance, CreateAttendance};
pub use leave_request::{CreateLeaveRequest, LeaveRequest, LeaveStatus};
pub use onboarding::{ChecklistStatus, CreateOnboarding, Onboarding};
pub use staff::{CreateStaff, Staff};
