//! Logging setup.
//!
//! The filter comes from `ADM_LOG` when set, else from the config. CLI runs
//! log to stderr. The TUI owns the terminal, so it logs to a file instead.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "ADM_LOG";

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum Sink {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. Call once, before any logging.
pub fn init(default_filter: &str, sink: Sink) -> Result<(), String> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match sink {
        Sink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        Sink::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
            }
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| format!("failed to open log file {}: {e}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| format!("failed to initialize logging: {e}"))
}
