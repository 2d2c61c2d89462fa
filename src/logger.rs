use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::{Error, Level, LogConfig, Result, rotation};

static INSTANCE: Lazy<Logger> = Lazy::new(Logger::new);

/// Mutable state of a logger, guarded by a single lock.
#[derive(Debug)]
struct State {
    /// Path of the current log file.
    path: Option<PathBuf>,
    /// The open file handle, `None` before `open` or after a failed rotation.
    file: Option<File>,
    /// Minimum level written.
    level: Level,
    /// Rotation threshold, 0 disables rotation.
    max_bytes: u64,
    /// Bytes accounted since the file was opened or last rotated.
    written_bytes: u64,
    /// Echo records to the console writer.
    console: bool,
    /// Where echoed records go, stdout unless replaced.
    echo: Console,
}

struct Console(Box<dyn Write + Send>);

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Console")
    }
}

/// A file logger that rotates its file once a byte threshold is reached.
///
/// Most programs use the shared [`Logger::instance`] through the
/// [`info!`](crate::info) family of macros. Independent loggers can be built
/// with [`Logger::new`] and passed around by reference.
///
/// The whole filter, write, flush and rotate sequence of a record runs under
/// one lock, so a logger may be shared between threads.
#[derive(Debug)]
pub struct Logger {
    state: Mutex<State>,
}

impl Logger {
    /// Create a logger with level DEBUG, no rotation and console echo on.
    /// Nothing is written until [`Logger::open`] succeeds.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                path: None,
                file: None,
                level: Level::Debug,
                max_bytes: 0,
                written_bytes: 0,
                console: true,
                echo: Console(Box::new(io::stdout())),
            }),
        }
    }

    /// The process-wide logger, created on first access.
    pub fn instance() -> &'static Logger {
        &INSTANCE
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // State stays consistent even if a writer panicked mid-record.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open `path` for appending, creating it if needed.
    ///
    /// Existing content is kept and counted towards the rotation threshold.
    /// Any previously open file is closed first; on failure the logger is
    /// left without a writable file.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut state = self.lock();

        state.file = None;
        state.path = Some(path.to_path_buf());

        let (file, len) = open_append(path)?;
        state.file = Some(file);
        state.written_bytes = len;

        tracing::debug!(path = %path.display(), size = len, "opened log file");
        Ok(())
    }

    /// Close the current file. Later writes fail with [`Error::NotOpen`].
    pub fn close(&self) {
        let mut state = self.lock();
        if state.file.take().is_some() {
            tracing::debug!("closed log file");
        }
    }

    /// Apply a configuration, opening its file when one is set.
    pub fn configure(&self, config: &LogConfig) -> Result<()> {
        self.set_level(config.level);
        self.set_max_bytes(config.max_bytes);
        self.set_console(config.console);
        if let Some(path) = &config.path {
            self.open(path)?;
        }
        Ok(())
    }

    /// Set the minimum level written.
    pub fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    /// Set the rotation threshold in bytes; 0 disables rotation.
    pub fn set_max_bytes(&self, max_bytes: u64) {
        self.lock().max_bytes = max_bytes;
    }

    /// Enable or disable echoing records to stdout.
    pub fn set_console(&self, console: bool) {
        self.lock().console = console;
    }

    /// Send echoed records to `writer` instead of stdout.
    pub fn set_console_writer<W: Write + Send + 'static>(&self, writer: W) {
        self.lock().echo = Console(Box::new(writer));
    }

    pub fn level(&self) -> Level {
        self.lock().level
    }

    pub fn max_bytes(&self) -> u64 {
        self.lock().max_bytes
    }

    /// Bytes accounted since the current file was opened or rotated.
    pub fn written_bytes(&self) -> u64 {
        self.lock().written_bytes
    }

    /// Path of the current log file, if `open` was called.
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    pub fn is_open(&self) -> bool {
        self.lock().file.is_some()
    }

    /// Write one record.
    ///
    /// The record is `"<timestamp> <LEVEL> <file>:<line><message>\n"`. Records
    /// below the configured level are dropped without touching the file.
    /// Header and message lengths (not the newline) count towards the
    /// rotation threshold, which is checked after the write.
    ///
    /// # Errors
    ///
    /// - [`Error::NotOpen`] if no file is open
    /// - [`Error::Io`] if writing or flushing fails; a failed console echo is
    ///   reported after the record has been counted and rotation checked
    /// - [`Error::Rotate`] if the file cannot be renamed aside
    pub fn log(&self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;

        if level < state.level {
            return Ok(());
        }
        let Some(out) = state.file.as_mut() else {
            return Err(Error::NotOpen);
        };

        let header = format!("{} {} {}:{}", rotation::header_timestamp()?, level, file, line);
        let body = fmt::format(args);

        let mut record = String::with_capacity(header.len() + body.len() + 1);
        record.push_str(&header);
        record.push_str(&body);
        record.push('\n');

        out.write_all(record.as_bytes())?;
        out.flush()?;
        state.written_bytes += (header.len() + body.len()) as u64;

        // The record is on disk; accounting and rotation must not depend on the echo.
        let echoed = if state.console {
            let echo = &mut state.echo.0;
            echo.write_all(record.as_bytes()).and_then(|_| echo.flush())
        } else {
            Ok(())
        };

        if state.max_bytes > 0 && state.written_bytes >= state.max_bytes {
            rotate(state)?;
        }
        Ok(echoed?)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `path` in append mode and return the handle with the file's length.
fn open_append(path: &Path) -> Result<(File, u64)> {
    let open = || -> io::Result<(File, u64)> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let len = file.seek(SeekFrom::End(0))?;
        Ok((file, len))
    };

    open().map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Move the current file to `<path>.<timestamp>` and start a fresh one.
///
/// The handle is dropped before the rename. If the rename fails the logger
/// stays closed until `open` is called again.
fn rotate(state: &mut State) -> Result<()> {
    state.file = None;
    let Some(path) = state.path.clone() else {
        return Err(Error::NotOpen);
    };

    let suffix = rotation::rotation_suffix()?;
    let target = rotation::rotated_path(&path, &suffix)?;
    std::fs::rename(&path, &target).map_err(|source| Error::Rotate {
        from: path.clone(),
        to: target.clone(),
        source,
    })?;

    let (file, len) = open_append(&path)?;
    state.file = Some(file);
    state.written_bytes = len;

    tracing::debug!(from = %path.display(), to = %target.display(), "rotated log file");
    Ok(())
}
