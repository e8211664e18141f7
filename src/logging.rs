use chrono::Local;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::ProbeError;

/// Sets up tracing with WARN+ (or `RUST_LOG`) to stderr and, when a log
/// directory is given, DEBUG+ from this crate to a timestamped file.
///
/// Stdout is left untouched so the probe output stays byte-for-byte stable.
/// The returned guard must be held until exit to flush the file writer.
pub fn setup_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, ProbeError> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_level(true)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(console_filter);

    let (file_layer, guard) = match log_dir {
        Some(log_dir) => {
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir)?;
            }
            let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
            let file_appender =
                tracing_appender::rolling::never(log_dir, format!("{}.log", timestamp));
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // File layer: DEBUG and above only for this crate
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_level(true)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_filter(EnvFilter::new("maskprobe=debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = Registry::default().with(console_layer).with(file_layer);

    // A subscriber may already be installed, e.g. by an earlier test
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return Ok(guard);
    }

    info!("Tracing initialized");
    Ok(guard)
}
