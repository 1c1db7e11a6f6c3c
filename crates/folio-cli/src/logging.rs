use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::LogLevel;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `--log-level` when set. With a log file, events are
/// appended there without ANSI colours. Without one they go to stderr,
/// unless `interactive` is set: the TUI owns the terminal, so logs are
/// dropped instead.
pub fn init(level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "folio={level},folio_core={level},folio_runtime={level}"
        ))
    });

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
            .try_init();
    } else if !interactive {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    }

    Ok(())
}
