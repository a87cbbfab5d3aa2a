// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::ParseLevelError;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/**
The severity of a log message.

A level does double duty: it picks the formatting of a message, and its name
is the child context the message is filed under.

The name is what counts.  `Level::Custom("DEBUG".into())` formats, filters and
compares exactly like [`Level::Debug`].
*/
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub enum Level {
    /// Informational, lowest priority
    Info,
    /// Print-style debugging
    Debug,
    /// A check passed
    Success,
    /// A check failed
    Fail,
    /// Suspicious condition
    #[default]
    Warning,
    /// Runtime error
    Error,
    /// Any other name.  Filed under its own context, formatted without flag or tag
    /// unless the name is one of the built-in ones.
    Custom(String),
}

impl Level {
    /// The name used both as the context name and in diagnostics.
    pub fn as_str(&self) -> &str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Success => "SUCCESS",
            Level::Fail => "FAIL",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Custom(name) => name,
        }
    }

    /**
    Priority used by threshold filtering.

    Custom levels have no priority and are never filtered out.
    */
    pub fn priority(&self) -> Option<u8> {
        match self.as_str() {
            "INFO" => Some(0),
            "DEBUG" => Some(10),
            "SUCCESS" | "FAIL" => Some(15),
            "WARNING" => Some(20),
            "ERROR" => Some(30),
            _ => None,
        }
    }

    /// Whether a record at this level passes a threshold of `threshold`.
    pub fn is_at_least(&self, threshold: &Level) -> bool {
        match (self.priority(), threshold.priority()) {
            (Some(mine), Some(theirs)) => mine >= theirs,
            _ => true,
        }
    }

    fn known(name: &str) -> Option<Level> {
        match name {
            "INFO" => Some(Level::Info),
            "DEBUG" => Some(Level::Debug),
            "SUCCESS" => Some(Level::Success),
            "FAIL" => Some(Level::Fail),
            "WARNING" => Some(Level::Warning),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient conversion: unknown names become [`Level::Custom`].
impl From<&str> for Level {
    fn from(name: &str) -> Self {
        Level::known(name).unwrap_or_else(|| Level::Custom(name.to_string()))
    }
}

impl From<String> for Level {
    fn from(name: String) -> Self {
        Level::known(&name).unwrap_or(Level::Custom(name))
    }
}

/// Strict conversion: only the six built-in names parse.
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::known(s).ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/*
Boilerplate notes.

Copy is gone because of Custom.
PartialEq/Eq/Hash go through the name, so a Custom spelled like a built-in is that built-in.
Ord is not implemented: priorities are partial (custom levels have none, SUCCESS and FAIL tie).
Default is WARNING, the threshold a fresh logger starts with.
*/
