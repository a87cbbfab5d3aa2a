// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registered checks ("tests") and the handles used to trigger them.
//!
//! A test is a predicate over one value, an expected result, and the two messages
//! to append when a trigger passes or fails.  Tests are registered with
//! [`ContextLogger::add_test`](crate::ContextLogger::add_test), which returns a typed
//! [`TestHandle`], and evaluated with
//! [`ContextLogger::trigger_test`](crate::ContextLogger::trigger_test).
//!
//! ```rust
//! use ctxlog::{ContextLogger, TestSpec};
//!
//! let mut logger = ContextLogger::new();
//! let over_100 = logger.add_test(TestSpec::new(|x: &i32| *x > 100).name(">100"));
//!
//! assert!(!logger.trigger_test(&over_100, &50).unwrap().passed());
//! assert!(logger.trigger_test(&over_100, &200).unwrap().passed());
//! ```

use crate::context::ContextPath;
use std::any::Any;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

type Predicate = Box<dyn Fn(&dyn Any) -> bool>;

/// Position of a test in its logger's list of all tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestId(pub(crate) usize);

impl TestId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for TestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "test #{}", self.0)
    }
}

/**
Everything needed to register a test.

Only the predicate is required; the rest defaults to a test named `test`, expected
to hold, with the stock pass/fail messages.
*/
pub struct TestSpec<T> {
    predicate: Box<dyn Fn(&T) -> bool>,
    result_key: bool,
    callback_true: Option<String>,
    callback_false: Option<String>,
    name: String,
}

impl<T: 'static> TestSpec<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            result_key: true,
            callback_true: None,
            callback_false: None,
            name: "test".to_string(),
        }
    }

    /// Requested name.  A collision inside the `TESTS` context is resolved with a numeric suffix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /**
    The value ANDed with the predicate's result.

    With `false` a trigger can never pass.
    */
    pub fn result_key(mut self, result_key: bool) -> Self {
        self.result_key = result_key;
        self
    }

    /// Line appended when a trigger passes, stored as given.
    pub fn on_pass(mut self, message: impl Into<String>) -> Self {
        self.callback_true = Some(message.into());
        self
    }

    /// Line appended when a trigger fails, stored as given.
    pub fn on_fail(mut self, message: impl Into<String>) -> Self {
        self.callback_false = Some(message.into());
        self
    }

    pub(crate) fn requested_name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> SpecParts {
        let predicate = self.predicate;
        SpecParts {
            predicate: Box::new(move |value: &dyn Any| {
                value.downcast_ref::<T>().is_some_and(|value| predicate(value))
            }),
            result_key: self.result_key,
            callback_true: self.callback_true,
            callback_false: self.callback_false,
        }
    }
}

impl<T> Debug for TestSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSpec")
            .field("name", &self.name)
            .field("result_key", &self.result_key)
            .field("callback_true", &self.callback_true)
            .field("callback_false", &self.callback_false)
            .finish_non_exhaustive()
    }
}

pub(crate) struct SpecParts {
    pub(crate) predicate: Predicate,
    pub(crate) result_key: bool,
    pub(crate) callback_true: Option<String>,
    pub(crate) callback_false: Option<String>,
}

/**
A registered test.

Created by `add_test` (not triggered, not passed) and changed only by `trigger_test`.
*/
pub struct TestRecord {
    pub(crate) name: String,
    pub(crate) predicate: Predicate,
    pub(crate) result_key: bool,
    pub(crate) callback_true: String,
    pub(crate) callback_false: String,
    pub(crate) passed: bool,
    pub(crate) triggered: bool,
    pub(crate) output: Vec<String>,
    pub(crate) context: ContextPath,
}

impl TestRecord {
    /// Stored name, unique within its `TESTS` context.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result_key(&self) -> bool {
        self.result_key
    }

    pub fn callback_true(&self) -> &str {
        &self.callback_true
    }

    pub fn callback_false(&self) -> &str {
        &self.callback_false
    }

    /// Outcome of the latest trigger.  `false` before the first one.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Every line this test's triggers appended to the message log, oldest first.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Path of the context whose `TESTS` child holds this record.
    pub fn context(&self) -> &ContextPath {
        &self.context
    }

    pub(crate) fn evaluate(&self, value: &dyn Any) -> bool {
        (self.predicate)(value) && self.result_key
    }
}

impl Debug for TestRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestRecord")
            .field("name", &self.name)
            .field("result_key", &self.result_key)
            .field("callback_true", &self.callback_true)
            .field("callback_false", &self.callback_false)
            .field("passed", &self.passed)
            .field("triggered", &self.triggered)
            .field("output", &self.output)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/**
A typed reference to a test registered on one particular logger.

The type parameter is the value type the predicate accepts, so a trigger can
only ever be given a value of the right type.
*/
pub struct TestHandle<T> {
    pub(crate) owner: u64,
    pub(crate) id: TestId,
    _value: PhantomData<fn(&T)>,
}

impl<T> TestHandle<T> {
    pub(crate) fn new(owner: u64, id: TestId) -> Self {
        Self {
            owner,
            id,
            _value: PhantomData,
        }
    }

    pub fn id(&self) -> TestId {
        self.id
    }
}

// Derives would require T: Clone etc.
impl<T> Clone for TestHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TestHandle<T> {}

impl<T> PartialEq for TestHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.id == other.id
    }
}

impl<T> Eq for TestHandle<T> {}

impl<T> Debug for TestHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestHandle")
            .field("owner", &self.owner)
            .field("id", &self.id)
            .finish()
    }
}
