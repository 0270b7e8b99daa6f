//! Client-side data core for an ERP dashboard.
//!
//! Four entity collections (staff, attendance, leave requests,
//! onboarding) fetched from a remote resource server into in-memory
//! stores, plus pure reporting functions over the store snapshots. No
//! presentation concerns live here.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod report;
pub mod store;

pub use api::{ApiClient, Resource};
pub use config::Config;
pub use dashboard::{AttendanceMark, BatchReport, Dashboard};
pub use error::{AppError, AppResult};
pub use store::{EntityStore, StoreStatus, UpdateOutcome};
