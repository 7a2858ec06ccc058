//! File-based logging module for Music Hub
//!
//! This module sets up tracing-based logging that writes to a file instead of stdout,
//! since the application uses a TUI that occupies the terminal.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::AppConfig;

const LOG_FILE_PREFIX: &str = "music-hub";

/// Initialize the logging system.
///
/// Logs are written to `<log_dir>/music-hub.YYYY-MM-DD.log` with daily rotation.
/// The log level comes from `RUST_LOG` when set, otherwise from `log_filter` in the config.
///
/// The returned guard flushes pending lines on drop; keep it alive until exit.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<WorkerGuard> {
    let log_dir = Path::new(&config.log_dir);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);

    // Non-blocking so a slow disk never stalls the render loop
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("music_hub=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", log_dir.display());

    Ok(guard)
}

/// Log a catalog request and its result
#[macro_export]
macro_rules! log_catalog_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, "Catalog request successful"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Catalog request failed"),
        }
    };
}
