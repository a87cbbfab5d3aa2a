// SPDX-License-Identifier: MIT OR Apache-2.0

//! `format!`-style shorthands for the leveled logging calls.
//!
//! Each macro takes the logger first and a format string with its arguments after,
//! and evaluates to the formatted line, like the method it wraps.
//!
//! ```rust
//! use ctxlog::ContextLogger;
//!
//! let mut logger = ContextLogger::new();
//! let id = 1110;
//! let line = ctxlog::warning!(logger, "event {id} changed");
//! assert_eq!(line, "WNG!|   |/!\\|event 1110 changed");
//! ctxlog::log!(logger, "SUCCESS", "{} checks", 2);
//! assert_eq!(logger.messages().len(), 2);
//! ```

/// Logs a formatted message at an explicit level.  See [`ContextLogger::log`](crate::ContextLogger::log).
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(::std::format!($($arg)+), $level)
    };
}

/// Logs a formatted message at INFO.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format!($($arg)+))
    };
}

/// Logs a formatted message at DEBUG.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format!($($arg)+))
    };
}

/// Logs a formatted message at WARNING.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format!($($arg)+))
    };
}

/// Logs a formatted message at ERROR.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format!($($arg)+))
    };
}
