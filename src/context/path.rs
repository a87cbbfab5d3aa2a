// SPDX-License-Identifier: MIT OR Apache-2.0

//! The path cursor.

use std::fmt::Display;

/**
An ordered list of context names from the root to the active context.

The empty path is the root.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContextPath {
    segments: Vec<String>,
}

impl ContextPath {
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Number of segments.  Drives the indentation of formatted messages.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// This path with `name` appended.
    pub fn child(&self, name: &str) -> ContextPath {
        let mut child = self.clone();
        child.push(name);
        child
    }
}

impl AsRef<[String]> for ContextPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

impl From<Vec<String>> for ContextPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl<S: Into<String>> FromIterator<S> for ContextPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// `/` for the root, `/INIT/Processor` below it.
impl Display for ContextPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
