//! # Sizelog
//!
//! A process-wide file logger with size-triggered rotation.
//!
//! ## Features
//!
//! - Leveled, timestamped records written to a file and echoed to stdout
//! - Rotation by renaming the file with a timestamp suffix once a byte threshold is reached
//! - Call-site capture through the `debug!` .. `fatal!` macros
//! - Optional bridge from the `tracing` ecosystem (feature `bridge`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use sizelog::{Level, Logger};
//!
//! let logger = Logger::instance();
//! logger.open("./test.log")?;
//! logger.set_level(Level::Info);
//! logger.set_max_bytes(1024);
//!
//! sizelog::debug!("debug")?; // filtered out
//! sizelog::info!("name is {}, age is {}", "wad", 12)?;
//! # Ok::<(), sizelog::Error>(())
//! ```

mod macros;

pub mod builder;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod rotation;

#[cfg(feature = "bridge")]
pub mod tracing_init;

pub use builder::LogBuilder;
pub use config::LogConfig;
pub use error::{Error, Result};
pub use level::Level;
pub use logger::Logger;

#[cfg(feature = "bridge")]
pub use tracing_init::{LoggerLayer, init_logging};

/// Start configuring the shared logger.
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}

/// The process-wide logger, created on first access.
pub fn instance() -> &'static Logger {
    Logger::instance()
}
