//! Logging Infrastructure
//!
//! - Console output, pretty for development or JSON for production
//! - Optional daily rotating file logs (`order-server.YYYY-MM-DD.log`)
//! - Rotated files older than the retention window are deleted hourly

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PREFIX: &str = "order-server";
const LOG_SUFFIX: &str = "log";

/// Delete rotated log files older than `retention_days`
///
/// Returns the number of removed files. Files that don't follow the
/// rotation naming scheme are left alone.
pub fn cleanup_old_logs(log_dir: &Path, retention_days: u32) -> anyhow::Result<usize> {
    use chrono::{Duration, Local, NaiveDate};

    let cutoff = Local::now().date_naive() - Duration::days(i64::from(retention_days));
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // order-server.YYYY-MM-DD.log
        if let Some(date_part) = name
            .strip_prefix(LOG_PREFIX)
            .and_then(|d| d.strip_prefix('.'))
            .and_then(|d| d.strip_suffix(LOG_SUFFIX))
            .and_then(|d| d.strip_suffix('.'))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level`. When `log_dir` is set, a
/// daily rotating file layer is added and a cleanup task is spawned, so this
/// must run inside a tokio runtime.
///
/// ```no_run
/// // Development (console only)
/// order_server::utils::logger::init_logger("debug", false, None, 14)?;
///
/// // Production (JSON console + files)
/// order_server::utils::logger::init_logger("info", true, Some("./logs"), 14)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
    retention_days: u32,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_PREFIX)
                .filename_suffix(LOG_SUFFIX)
                .build(dir)?;

            tokio::spawn(periodic_cleanup(dir.to_path_buf(), retention_days));

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(appender))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Periodic cleanup task - runs every hour
async fn periodic_cleanup(log_dir: PathBuf, retention_days: u32) {
    use tokio::time::{Duration, sleep};

    loop {
        if let Err(e) = cleanup_old_logs(&log_dir, retention_days) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
        sleep(Duration::from_secs(3600)).await;
    }
}
