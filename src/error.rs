// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the few operations that can fail.
//!
//! Almost nothing in ctxlog fails: navigation, logging and triggering degrade
//! and report through the message log instead. The exceptions are strict path
//! resolution and strict level parsing.

use thiserror::Error;

/// Failure to resolve a path strictly through a [`ContextTree`](crate::context::ContextTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment of the path names no child of the node reached so far.
    #[error("no context named `{segment}` at depth {depth}")]
    MissingSegment { segment: String, depth: usize },
    /// A segment exists but names a log entry or a test, which have no children.
    #[error("`{segment}` at depth {depth} is not a context")]
    NotAContext { segment: String, depth: usize },
}

/// Returned by the strict [`FromStr`](std::str::FromStr) impl of [`Level`](crate::Level).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);
