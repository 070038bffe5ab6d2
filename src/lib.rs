//! Bazaar Indian Stock Market Dashboard Library
//!
//! A terminal dashboard for NSE/BSE index tickers, top movers, market
//! sentiment and sectoral performance, built on a refresh worker that feeds a
//! single UI event queue.

pub mod cli;
pub mod config;
pub mod market_data;
pub mod provider;
pub mod sections;
pub mod session;
pub mod ui;

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Application result type for consistent error handling
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bazaar={}", level).into())
}

/// Initialize tracing subscriber for logging.
///
/// With `log_file` set, logs go to a daily rolling file and the returned guard
/// must be held until exit; otherwise they go to stderr.
pub fn init_logging(level: &str, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let Some(log_file) = log_file else {
        tracing_subscriber::registry()
            .with(env_filter(level))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no file name: {}", log_file))?;

    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;

    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(guard))
}
