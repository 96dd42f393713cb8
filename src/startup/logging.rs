//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to a file under the local
//! data directory. The filter comes from `SOLIDLENS_LOG` (default `info`).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "SOLIDLENS_LOG";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no local data directory on this platform")]
    NoDataDir,

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// `<data_local_dir>/solidlens/solidlens.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("solidlens").join("solidlens.log"))
}

/// Filter from `SOLIDLENS_LOG`, falling back to `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path` (appending).
pub fn init_logging(path: &Path) -> Result<PathBuf, LoggingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(path.to_path_buf())
}

/// Install the subscriber at [`default_log_path`].
pub fn init_default_logging() -> Result<PathBuf, LoggingError> {
    let path = default_log_path().ok_or(LoggingError::NoDataDir)?;
    init_logging(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_log_path_shape() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("solidlens/solidlens.log"));
        }
    }

    #[test]
    #[serial]
    fn test_env_filter_falls_back_to_info() {
        std::env::remove_var(ENV_LOG);
        assert_eq!(env_filter().to_string(), "info");
    }

    #[test]
    #[serial]
    fn test_env_filter_reads_env() {
        std::env::set_var(ENV_LOG, "solidlens=debug");
        let filter = env_filter();
        std::env::remove_var(ENV_LOG);
        assert_eq!(filter.to_string(), "solidlens=debug");
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the log file
        let err = init_logging(dir.path()).unwrap_err();
        assert!(matches!(err, LoggingError::Open { .. }));
    }
}
