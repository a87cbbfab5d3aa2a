// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the message log.
//!
//! A [`LogRecord`] is one line of a [`ContextLogger`](crate::ContextLogger)'s message log:
//! the already-formatted text together with the level it was formatted at.  The text
//! is final by the time a record exists; loggers print it verbatim.
//!
//! # Example
//!
//! ```rust
//! use ctxlog::{LogRecord, Level};
//!
//! let record = LogRecord::new(Level::Debug, "DBG||-->|hello");
//! assert_eq!(record.to_string(), "DBG||-->|hello");
//! assert_eq!(record.level(), &Level::Debug);
//! ```

use crate::Level;
use std::fmt::{Debug, Display};

/**
A formatted entry in the message log.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    level: Level,
    text: String,
}

impl LogRecord {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The formatted line, without a trailing newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for LogRecord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone, PartialEq/Eq, Hash: derived; records are plain data
- Display: the formatted text, exactly as `write_log` prints it
- AsRef<str>: lets records be compared against expected lines cheaply

NOT IMPLEMENTED:
- Copy: owns a String
- Default: a record without a level has no meaning
- Ord/PartialOrd: records are ordered by position in the log, not by content
*/
