use crate::error::QuranVidResult;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

/// Install the global tracing subscriber, writing to an append-only log file.
///
/// Level defaults to `info`; `RUST_LOG` overrides it. Called once at process
/// start, before any pipeline work.
pub fn init(log_path: &Path) -> QuranVidResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
