use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors that can occur while logging
#[derive(ThisError, Debug)]
pub enum Error {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A record was written while no file handle is open.
    #[error("log file is not open")]
    NotOpen,
    /// The current file could not be renamed aside during rotation.
    #[error("failed to rotate {} to {}: {source}", .from.display(), .to.display())]
    Rotate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Timestamp formatting failed.
    #[error("Time format error: {0}")]
    Format(#[from] time::error::Format),
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Initialization failed.
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
