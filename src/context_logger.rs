// SPDX-License-Identifier: MIT OR Apache-2.0

//! The context logger: navigation, leveled logging, tests and output.
//!
//! A [`ContextLogger`] owns a [`ContextTree`], a cursor into it, the flat message log
//! and the list of every registered test.  All operations are synchronous and none of
//! them fail: when the world is not in the expected shape the logger degrades and
//! reports it as a diagnostic in the message log.
//!
//! # Diagnostics
//!
//! Non-silent navigation and a few other operations log about themselves:
//!
//! | Situation                           | Level   | Message                                                  |
//! |-------------------------------------|---------|----------------------------------------------------------|
//! | navigating into an absent context   | WARNING | `Destination does not exist, creating nested context: X` |
//! | navigating into a context           | DEBUG   | `Moving to: X`                                           |
//! | navigating to the parent            | DEBUG   | `Moving to parent folder`                                |
//! | `parent` at the root                | WARNING | `Cannot Navigate to parent, root has no parents`         |
//! | navigating into `TESTS`             | WARNING | `Cannot Navigate to TESTS, it only holds test records`   |
//! | a test was registered               | DEBUG   | `Created test: NAME`                                     |
//! | trigger outside the test's context  | WARNING | `Not in the correct context to trigger the test`         |
//!
//! # Example
//!
//! ```rust
//! use ctxlog::{ContextLogger, InMemoryLogger, TestSpec};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemoryLogger::new());
//! let mut logger = ContextLogger::new();
//! logger.set_loggers(vec![sink.clone()]);
//!
//! logger.navigate_silent("INIT");
//! logger.debug("Initializing ...");
//! let handled = logger.add_test(TestSpec::new(|handled: &bool| *handled).name("Event handled"));
//! logger.trigger_test(&handled, &false);
//! logger.navigate_silent("parent");
//!
//! logger.write_log();
//! assert_eq!(
//!     sink.lines(),
//!     vec![
//!         "DBG||   |   |-->|Initializing ...",
//!         "DBG||   |   |-->|Created test: Event handled",
//!         "|/X\\|XXX|   |/X\\|Test Event handled failed!",
//!     ]
//! );
//! ```

use crate::context::{ContextPath, ContextTree, TESTS};
use crate::format::format_message;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use crate::stdout_logger::StdOutLogger;
use crate::test_record::{TestHandle, TestId, TestRecord, TestSpec};
use crate::Level;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The navigation destination that moves one level up.
pub const PARENT: &str = "parent";

static LOGGER_ID: AtomicU64 = AtomicU64::new(0);

/**
A logger that files leveled messages and tests into a tree of named contexts.

Instances are fully independent of each other.  A script that wants one shared
logger keeps one around and passes it by reference.
*/
#[derive(Debug)]
pub struct ContextLogger {
    id: u64,
    tree: ContextTree,
    path: ContextPath,
    tests: Vec<TestRecord>,
    unnamed_tests: usize,
    level: Level,
    msg_log: Vec<LogRecord>,
    loggers: Vec<Arc<dyn Logger>>,
}

impl Default for ContextLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextLogger {
    /// A logger at the root of an empty tree, with a WARNING threshold, writing to stdout.
    pub fn new() -> Self {
        Self {
            id: LOGGER_ID.fetch_add(1, Ordering::Relaxed),
            tree: ContextTree::new(),
            path: ContextPath::root(),
            tests: Vec::new(),
            unnamed_tests: 0,
            level: Level::default(),
            msg_log: Vec::new(),
            loggers: vec![Arc::new(StdOutLogger::new())],
        }
    }

    pub fn with_level(level: impl Into<Level>) -> Self {
        Self {
            level: level.into(),
            ..Self::new()
        }
    }

    // ------------------------------------------------------------------
    // configuration

    /// Threshold used by [`write_log_filtered`](Self::write_log_filtered).
    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn set_level(&mut self, level: impl Into<Level>) {
        self.level = level.into();
    }

    pub fn loggers(&self) -> Vec<Arc<dyn Logger>> {
        self.loggers.clone()
    }

    /// Adds a sink alongside the existing ones.
    pub fn add_logger(&mut self, logger: Arc<dyn Logger>) {
        self.loggers.push(logger);
    }

    /// Replaces every sink.  An empty list silences `write_log`.
    pub fn set_loggers(&mut self, loggers: Vec<Arc<dyn Logger>>) {
        self.loggers = loggers;
    }

    // ------------------------------------------------------------------
    // inspection

    pub fn tree(&self) -> &ContextTree {
        &self.tree
    }

    pub fn path(&self) -> &ContextPath {
        &self.path
    }

    /// Every registered test, in registration order.
    pub fn tests(&self) -> &[TestRecord] {
        &self.tests
    }

    /// The record behind `handle`, if the handle came from this logger.
    pub fn test<T>(&self, handle: &TestHandle<T>) -> Option<&TestRecord> {
        self.index_of(handle).map(|index| &self.tests[index])
    }

    pub fn test_by_id(&self, id: TestId) -> Option<&TestRecord> {
        self.tests.get(id.0)
    }

    /// The message log, in append order.
    pub fn messages(&self) -> &[LogRecord] {
        &self.msg_log
    }

    // ------------------------------------------------------------------
    // navigation

    /**
    Moves the cursor.

    `"parent"` moves one level up (a no-op at the root).  Any other name moves into
    that child of the current context, creating it first if needed.
    */
    pub fn navigate(&mut self, destination: &str) {
        self.navigate_with(destination, false);
    }

    /// [`navigate`](Self::navigate) without the diagnostic messages.
    pub fn navigate_silent(&mut self, destination: &str) {
        self.navigate_with(destination, true);
    }

    /**
    Creates a fresh child named after `desired` and moves into it.

    If `desired` is taken the child gets the first free `desired_N` name instead.
    Returns the name actually used.
    */
    pub fn navigate_new(&mut self, desired: &str) -> String {
        let name = self.tree.autoname(self.path.segments(), desired);
        self.navigate(&name);
        name
    }

    fn navigate_with(&mut self, destination: &str, silent: bool) {
        if destination == PARENT {
            if self.path.is_root() {
                if !silent {
                    self.warning("Cannot Navigate to parent, root has no parents");
                }
                return;
            }
            if !silent {
                self.debug("Moving to parent folder");
            }
            self.path.pop();
            return;
        }
        if destination == TESTS {
            if !silent {
                self.warning(format!(
                    "Cannot Navigate to {TESTS}, it only holds test records"
                ));
            }
            return;
        }
        let exists = self
            .tree
            .current_context(self.path.segments())
            .contains(destination);
        if !exists && !silent {
            self.warning(format!(
                "Destination does not exist, creating nested context: {destination}"
            ));
        }
        if !silent {
            self.debug(format!("Moving to: {destination}"));
        }
        self.enter(destination);
    }

    fn enter(&mut self, name: &str) {
        self.tree.ensure_context(self.path.segments(), name);
        self.path.push(name);
    }

    // ------------------------------------------------------------------
    // logging

    /**
    Logs `message` at `level` and returns the formatted line.

    The line is filed as the next numbered entry of the `level` child of the current
    context, and appended to the message log.  It is formatted from inside that
    child, so it is indented one level deeper than the current path.
    */
    pub fn log(&mut self, message: impl AsRef<str>, level: impl Into<Level>) -> String {
        self.log_entry(None, message.as_ref(), level.into())
    }

    /// Like [`log`](Self::log), with the line reading `name:message`.
    pub fn log_named(
        &mut self,
        name: &str,
        message: impl AsRef<str>,
        level: impl Into<Level>,
    ) -> String {
        self.log_entry(Some(name), message.as_ref(), level.into())
    }

    pub fn info(&mut self, message: impl AsRef<str>) -> String {
        self.log(message, Level::Info)
    }

    pub fn debug(&mut self, message: impl AsRef<str>) -> String {
        self.log(message, Level::Debug)
    }

    pub fn warning(&mut self, message: impl AsRef<str>) -> String {
        self.log(message, Level::Warning)
    }

    pub fn error(&mut self, message: impl AsRef<str>) -> String {
        self.log(message, Level::Error)
    }

    fn log_entry(&mut self, name: Option<&str>, message: &str, level: Level) -> String {
        if level.as_str() == TESTS {
            // Never file entries among test records; the line still reaches the log.
            let text = self.format_line(&level, message, name);
            self.record(level, text.clone());
            return text;
        }
        self.enter(level.as_str());
        let text = self.format_line(&level, message, name);
        self.tree
            .current_context_mut(self.path.segments())
            .push_entry(text.clone());
        self.record(level, text.clone());
        self.path.pop();
        text
    }

    /// Formats `message` at SUCCESS for the current depth without logging it.
    pub fn success_message(&self, message: impl AsRef<str>) -> String {
        self.format_line(&Level::Success, message.as_ref(), None)
    }

    /// Formats `message` at FAIL for the current depth without logging it.
    pub fn fail_message(&self, message: impl AsRef<str>) -> String {
        self.format_line(&Level::Fail, message.as_ref(), None)
    }

    /// Formats `message` at any level for the current depth without logging it.
    pub fn format_at(&self, level: &Level, message: impl AsRef<str>) -> String {
        self.format_line(level, message.as_ref(), None)
    }

    fn format_line(&self, level: &Level, message: &str, name: Option<&str>) -> String {
        format_message(level, message, self.path.depth(), name)
    }

    fn record(&mut self, level: Level, text: String) {
        self.msg_log.push(LogRecord::new(level, text));
    }

    // ------------------------------------------------------------------
    // tests

    /**
    Registers a test in the `TESTS` child of the current context.

    Omitted pass/fail messages default to `Test NAME passed :D` formatted at SUCCESS
    and `Test NAME failed!` formatted at FAIL, using the requested name and the depth
    of the `TESTS` context.  If the requested name is taken in that context, the test
    is stored as `NAME_N`, with N drawn from a counter shared by all collisions.
    */
    pub fn add_test<T: 'static>(&mut self, spec: TestSpec<T>) -> TestHandle<T> {
        let home = self.path.clone();
        self.enter(TESTS);

        let requested = spec.requested_name().to_string();
        let parts = spec.into_parts();
        let callback_false = parts
            .callback_false
            .unwrap_or_else(|| self.fail_message(format!("Test {requested} failed!")));
        let callback_true = parts
            .callback_true
            .unwrap_or_else(|| self.success_message(format!("Test {requested} passed :D")));
        let name = self.autoname_test(&requested);

        let id = TestId(self.tests.len());
        self.tree
            .current_context_mut(self.path.segments())
            .insert_test(&name, id);
        self.tests.push(TestRecord {
            name: name.clone(),
            predicate: parts.predicate,
            result_key: parts.result_key,
            callback_true,
            callback_false,
            passed: false,
            triggered: false,
            output: Vec::new(),
            context: home.clone(),
        });

        self.path = home;
        self.debug(format!("Created test: {name}"));
        TestHandle::new(self.id, id)
    }

    fn autoname_test(&mut self, requested: &str) -> String {
        let context = self.tree.current_context(self.path.segments());
        let mut name = requested.to_string();
        while context.contains(&name) {
            self.unnamed_tests += 1;
            name = format!("{requested}_{}", self.unnamed_tests);
        }
        name
    }

    /**
    Evaluates a test against `value` and logs the outcome.

    The test passes when its predicate holds and its result key is `true`.  On
    every trigger after the first, a note saying whether the test `was Passed` or
    `was Failed` and `now is` or `still is` comes first; then the pass or fail
    message is appended.

    Triggering from a context whose `TESTS` child does not hold the test is
    reported but still evaluated.

    A handle issued by another logger is different: this logger has no record
    behind it, so the predicate is not evaluated.  `Unknown test: test #N` is
    logged at WARNING and `None` is returned.
    */
    pub fn trigger_test<T: 'static>(
        &mut self,
        handle: &TestHandle<T>,
        value: &T,
    ) -> Option<&TestRecord> {
        let Some(index) = self.index_of(handle) else {
            self.warning(format!("Unknown test: {}", handle.id()));
            return None;
        };
        let in_context = self
            .tree
            .current_context(self.path.segments())
            .child_context(TESTS)
            .is_some_and(|tests| tests.contains_test(handle.id()));
        if !in_context {
            self.warning("Not in the correct context to trigger the test");
        }

        let result = self.tests[index].evaluate(value);
        self.trigger_messages(index, result);
        self.tests[index].triggered = true;
        Some(&self.tests[index])
    }

    fn trigger_messages(&mut self, index: usize, result: bool) {
        let status = if result { Level::Success } else { Level::Fail };
        let test = &self.tests[index];
        let mut lines = Vec::with_capacity(2);
        if test.triggered {
            let was = if test.passed { "Passed" } else { "Failed" };
            let change = if test.passed != result {
                "now is"
            } else {
                "still is"
            };
            lines.push(self.format_line(
                &status,
                &format!("{} was {was}, {change}:", test.name),
                None,
            ));
        }
        lines.push(if result {
            test.callback_true.clone()
        } else {
            test.callback_false.clone()
        });

        for line in &lines {
            self.record(status.clone(), line.clone());
        }
        let test = &mut self.tests[index];
        test.output.extend(lines);
        test.passed = result;
    }

    fn index_of<T>(&self, handle: &TestHandle<T>) -> Option<usize> {
        (handle.owner == self.id && handle.id.0 < self.tests.len()).then_some(handle.id.0)
    }

    // ------------------------------------------------------------------
    // output

    /**
    Sends every message, in append order, to every sink.

    # Panics

    The default [`StdOutLogger`] panics if stdout cannot be written, for example
    when the reading end of a pipe has been closed.  Install another sink with
    [`set_loggers`](Self::set_loggers) if that matters.
    */
    pub fn write_log(&self) {
        self.dispatch(self.msg_log.iter());
    }

    /// Like [`write_log`](Self::write_log), skipping messages below the logger's level.
    pub fn write_log_filtered(&self) {
        self.dispatch(
            self.msg_log
                .iter()
                .filter(|record| record.level().is_at_least(&self.level)),
        );
    }

    fn dispatch<'a>(&self, records: impl Iterator<Item = &'a LogRecord>) {
        for record in records {
            for logger in &self.loggers {
                logger.finish_log_record(record.clone());
            }
        }
        for logger in &self.loggers {
            logger.prepare_to_die();
        }
    }
}
