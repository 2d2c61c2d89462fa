//! Builder pattern for configuring the shared logger.
//!
//! # Example
//!
//! ```rust,no_run
//! use sizelog::Level;
//!
//! let logger = sizelog::builder()
//!     .with_file("/var/log/app.log")
//!     .with_level(Level::Info)
//!     .with_max_bytes(10 * 1024 * 1024)
//!     .init()
//!     .expect("Failed to initialize logging");
//!
//! sizelog::info!(logger: logger, "started")?;
//! # Ok::<(), sizelog::Error>(())
//! ```

use std::path::PathBuf;

use crate::{Level, LogConfig, Logger, Result};

/// A builder for configuring and opening a logger.
#[derive(Debug, Clone, Default)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Set the log file path.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_path(path);
        self
    }

    /// Set the minimum level written.
    pub fn with_level(mut self, level: Level) -> Self {
        self.config = self.config.with_level(level);
        self
    }

    /// Set the rotation threshold in bytes (0 disables rotation).
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.config = self.config.with_max_bytes(max_bytes);
        self
    }

    /// Enable or disable echoing records to stdout.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console(enabled);
        self
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Apply the configuration to an existing logger.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        logger.configure(&self.config)
    }

    /// Configure the shared logger and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`](crate::Error::Open) if the configured file
    /// cannot be opened.
    pub fn init(self) -> Result<&'static Logger> {
        let logger = Logger::instance();
        self.apply(logger)?;
        Ok(logger)
    }
}
