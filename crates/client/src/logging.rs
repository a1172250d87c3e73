//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays free for snapshot output, or to a
//! single file when a log directory is configured.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "rpg.log";

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Keep the returned
/// guard alive for the whole run; dropping it flushes and closes the file.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(Some(guard))
}
