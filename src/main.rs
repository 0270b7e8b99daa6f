//! Headless snapshot binary: refreshes every collection, prints the
//! rollups and attendance trend, and writes the trend CSV when a path
//! is configured.

use anyhow::Context;
use chrono::Local;
use tracing::info;
use tracing_appender::rolling;

use erpdash::Config;
use erpdash::dashboard::Dashboard;
use erpdash::report::trend_to_csv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;

    // Rolling daily log
    let file_appender = rolling::daily("logs", "erpdash.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    info!(base_url = %config.api_base_url, "refreshing collections");
    let dashboard = Dashboard::new(&config)?;
    dashboard.refresh_all().await.context("initial refresh")?;

    let leave = dashboard.leave_rollup();
    println!(
        "Leave requests: {} total ({} pending, {} approved, {} rejected)",
        leave.total, leave.pending, leave.approved, leave.rejected
    );

    let onboarding = dashboard.onboarding_rollup();
    println!(
        "Onboarding: {} total, {}% completed ({} not started, {} in progress)",
        onboarding.total,
        onboarding.completion_rate(),
        onboarding.not_started,
        onboarding.in_progress
    );

    let today = Local::now().date_naive();
    let rows = dashboard.attendance_trend(today, config.trend_granularity);
    println!("Attendance trend ({}):", config.trend_granularity);
    for row in &rows {
        println!(
            "  {:<14} present {:>4}  absent {:>4}  rate {:>3}%{}",
            row.label,
            row.present,
            row.absent,
            row.rate,
            if row.is_today { "  (today)" } else { "" }
        );
    }

    if let Some(path) = &config.trend_csv_path {
        let blob = trend_to_csv(&rows).context("rendering trend CSV")?;
        std::fs::write(path, blob).with_context(|| format!("writing {path}"))?;
        info!(path = %path, "trend export written");
        println!("Trend exported to {path}");
    }

    Ok(())
}
