//! Forward `tracing` events into a [`Logger`].

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::{Error, Level, LogConfig, Logger, Result};

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// A layer that writes every `tracing` event as one logger record.
///
/// The record body is the event message followed by ` key=value` for each
/// other field. Events emitted by this crate are skipped so that the
/// logger's own diagnostics never end up in its file.
#[derive(Debug, Clone, Copy)]
pub struct LoggerLayer {
    logger: &'static Logger,
}

impl LoggerLayer {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl Default for LoggerLayer {
    fn default() -> Self {
        Self::new(Logger::instance())
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if is_internal(meta.target()) {
            return;
        }

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let result = self.logger.log(
            level_from_tracing(meta.level()),
            meta.file().unwrap_or("<unknown>"),
            meta.line().unwrap_or(0),
            format_args!("{}{}", visitor.message, visitor.fields),
        );
        // A layer has no caller to hand the error to.
        if let Err(e) = result {
            eprintln!("{}: failed to write log record: {}", CRATE_TARGET, e);
        }
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: String,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn is_internal(target: &str) -> bool {
    target
        .strip_prefix(CRATE_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

fn level_from_tracing(level: &tracing::Level) -> Level {
    if *level == tracing::Level::ERROR {
        Level::Error
    } else if *level == tracing::Level::WARN {
        Level::Warn
    } else if *level == tracing::Level::INFO {
        Level::Info
    } else {
        Level::Debug
    }
}

/// Configure the shared logger and route `tracing` events into it.
///
/// `RUST_LOG` takes precedence over the configured level for filtering
/// events; the logger's own level still applies afterwards.
///
/// # Errors
///
/// Returns an error if:
/// - The log file cannot be opened
/// - `RUST_LOG` is not a valid filter
/// - A global tracing subscriber is already installed
pub fn init_logging(config: &LogConfig) -> Result<&'static Logger> {
    let logger = Logger::instance();
    logger.configure(config)?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let log_spec = effective_log_spec(config, rust_log.as_deref());
    let env_filter = EnvFilter::try_new(&log_spec).map_err(|e| Error::Init(e.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(LoggerLayer::new(logger))
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(logger)
}

/// Determine the filter directive from `RUST_LOG` and the configured level.
fn effective_log_spec(config: &LogConfig, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => config.level.as_filter().to_string(),
    }
}
