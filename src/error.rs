//! Unified error type for the dashboard core.
//! Every fallible operation (api, store, dashboard, export) returns
//! AppResult so callers see one error surface.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Transport / decode
    // ---------------------------
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Remote API rejections
    // ---------------------------
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    // ---------------------------
    // Local lookups
    // ---------------------------
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid {entity} status transition: {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Short failure reason recorded on a store's error field.
    pub fn store_message(&self) -> String {
        match self {
            AppError::Api { status, message } => format!("{} ({})", message, status),
            other => other.to_string(),
        }
    }
}
