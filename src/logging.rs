//! Tracing subscriber setup

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop everything; used while the TUI owns the terminal
    Discard,
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `default_filter` when set.
///
/// # Errors
///
/// Returns an error if the filter is malformed, the log file cannot be
/// created, or a subscriber is already installed.
pub fn init_tracing(default_filter: &str, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;

    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        LogTarget::Discard => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .try_init(),
    }
    .context("tracing subscriber already installed")?;

    tracing::trace!("tracing initialised");
    Ok(())
}
