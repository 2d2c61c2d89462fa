//! Logging macros that capture the call site.
//!
//! Each macro formats its arguments like [`format!`] and writes one record at
//! the matching level with `file!()` and `line!()` of the caller. Without a
//! `logger:` argument the shared [`Logger::instance`](crate::Logger::instance)
//! is used. Every macro evaluates to [`Result<()>`](crate::Result).
//!
//! ```rust,no_run
//! let logger = sizelog::Logger::new();
//! logger.open("app.log")?;
//! sizelog::info!(logger: &logger, "name is {}, age is {}", "wad", 12)?;
//!
//! sizelog::Logger::instance().open("shared.log")?;
//! sizelog::warn!("disk at {}%", 91)?;
//! # Ok::<(), sizelog::Error>(())
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::log(
            $logger,
            $level,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Write a DEBUG record.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::Logger::instance(), $crate::Level::Debug, $($arg)+)
    };
}

/// Write an INFO record.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::Logger::instance(), $crate::Level::Info, $($arg)+)
    };
}

/// Write a WARN record.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::Logger::instance(), $crate::Level::Warn, $($arg)+)
    };
}

/// Write an ERROR record.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::Logger::instance(), $crate::Level::Error, $($arg)+)
    };
}

/// Write a FATAL record. This only logs; it does not exit the process.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::Logger::instance(), $crate::Level::Fatal, $($arg)+)
    };
}
