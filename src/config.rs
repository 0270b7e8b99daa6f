//! Environment-driven configuration for the client.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;

use crate::error::{AppError, AppResult};
use crate::report::Granularity;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the remote resource server.
    pub api_base_url: String,
    /// Client-side deadline for every request; zero disables it.
    pub http_timeout: Duration,
    /// When set, leave/onboarding status writes must follow the state
    /// machine; off by default (free writes, the observed behavior).
    pub enforce_status_flow: bool,
    /// Where the binary writes the trend CSV, if anywhere.
    pub trend_csv_path: Option<String>,
    pub trend_granularity: Granularity,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok();

        Ok(Self {
            api_base_url: required("API_BASE_URL")?,
            http_timeout: Duration::from_secs(parsed("HTTP_TIMEOUT_SECS", 30)?),
            enforce_status_flow: parsed("ENFORCE_STATUS_FLOW", false)?,
            trend_csv_path: env::var("TREND_CSV_PATH").ok(),
            trend_granularity: parsed("TREND_GRANULARITY", Granularity::Daily)?,
        })
    }
}

fn required(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Config(format!("{name} must be set")))
}

fn parsed<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("invalid {name} {raw:?}: {e}"))),
        Err(_) => Ok(default),
    }
}
