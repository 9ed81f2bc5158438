//! Tracing setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file instead. `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{BusinessError, BusinessResult};

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("business_center={}", level)))
}

/// Install the global subscriber
///
/// A second call is a no-op.
pub fn init_tracing(level: &str, target: LogTarget<'_>) -> BusinessResult<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(level));

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    BusinessError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_target_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("business-center.log");

        init_tracing("debug", LogTarget::File(&path)).unwrap();
        assert!(path.exists());

        // Second init is harmless
        init_tracing("debug", LogTarget::Stderr).unwrap();
    }

    #[test]
    fn test_missing_log_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("business-center.log");
        let err = init_tracing("info", LogTarget::File(&path)).unwrap_err();
        assert!(matches!(err, BusinessError::Io(_)));
    }
}
