//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "widget=info,lib_swap=info,warn";

pub const LOG_FILE_PREFIX: &str = "widget.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "widget=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_dir: non_empty("WIDGET_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: non_empty("WIDGET_LOG_STDERR")
                .map(|v| v.trim() != "0")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Full path of the current (undated) log file name
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
