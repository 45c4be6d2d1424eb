//! Tracing subscriber setup
//!
//! The filter comes from `TASKS_LOG` (e.g. `TASKS_LOG=debug`), falling back
//! to `debug` with `--verbose` and `warn` otherwise.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TASKS_LOG";

/// Where log lines are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// Appends to a file; used by the TUI so the screen stays clean
    File(PathBuf),
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Installs the global subscriber
///
/// A second call is a no-op: the first subscriber stays installed.
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    let installed = match target {
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
