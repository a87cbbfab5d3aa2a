// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! This module provides an in-memory sink for testing and programmatic inspection.
//! The `InMemoryLogger` captures what [`write_log`](crate::ContextLogger::write_log)
//! would have printed, instead of sending it to stdout, which makes it the tool of
//! choice for:
//!
//! - Unit testing code that drives a `ContextLogger`
//! - Comparing a session's output against golden lines
//! - Capturing output where stdout is redirected or unavailable
//!
//! ## Architecture
//!
//! Records are kept in a `Mutex<Vec<LogRecord>>`, so a caller can hold an
//! `Arc<InMemoryLogger>` while the `ContextLogger` holds another and writes to it.

use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::sync::Mutex;

/// An in-memory logger that stores the records it receives.
///
/// # Example
///
/// ```rust
/// use ctxlog::{ContextLogger, InMemoryLogger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemoryLogger::new());
/// let mut logger = ContextLogger::new();
/// logger.set_loggers(vec![sink.clone()]);
///
/// logger.debug("hello");
/// logger.write_log();
///
/// assert_eq!(sink.drain_logs(), "DBG||   |-->|hello");
/// // Buffer is now empty
/// assert_eq!(sink.drain_logs(), "");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLogger {
    logs: Mutex<Vec<LogRecord>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes and required by Logger trait
// - Default: Derived, an empty buffer
// - Clone: NOT implemented - callers share one buffer through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex state is problematic
// - Send/Sync: Automatically implemented due to Mutex usage (required for Logger trait)

impl InMemoryLogger {
    /// Creates a new `InMemoryLogger` with an empty buffer.
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Drains all captured lines into a single string, clearing the internal buffer.
    ///
    /// Lines are joined with newlines, without a trailing newline.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap();
        let result = logs
            .iter()
            .map(LogRecord::text)
            .collect::<Vec<_>>()
            .join("\n");
        logs.clear();
        result
    }

    /// Returns a copy of the captured lines without clearing them.
    pub fn lines(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.text().to_string())
            .collect()
    }

    /// Returns a copy of the captured records, levels included.
    pub fn records(&self) -> Vec<LogRecord> {
        self.logs.lock().unwrap().clone()
    }

    /// Number of records captured since the last drain.
    pub fn len(&self) -> usize {
        self.logs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for InMemoryLogger {
    fn finish_log_record(&self, record: LogRecord) {
        self.logs.lock().unwrap().push(record);
    }

    /// No-op: nothing is buffered beyond the records themselves.
    fn prepare_to_die(&self) {}
}
