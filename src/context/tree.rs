// SPDX-License-Identifier: MIT OR Apache-2.0

//! The context tree and its path resolution rules.

use super::node::{Context, Key, Node};
use crate::error::PathError;
use std::fmt::Display;

/// Name of the child context that holds test records.
pub const TESTS: &str = "TESTS";

/**
The nested namespace a [`ContextLogger`](crate::ContextLogger) writes into.

The tree itself has no cursor; every operation takes the path it should act on.

# Resolution

[`current_context`](Self::current_context) is lenient: a segment that does not
name a sub-context is skipped, and the lookup carries on from the deepest node
reached so far.  Navigation relies on this never failing.
[`resolve`](Self::resolve) is the strict counterpart.

```rust
use ctxlog::context::ContextTree;

let mut tree = ContextTree::new();
let path = vec!["INIT".to_string()];
assert!(tree.ensure_context(&path, "Processor"));
assert!(!tree.ensure_context(&path, "Processor"));

let processor: Vec<String> = vec!["INIT".into(), "Processor".into()];
assert!(tree.resolve(&processor).is_ok());

let missing: Vec<String> = vec!["INIT".into(), "nope".into()];
assert!(tree.resolve(&missing).is_err());
// the lenient lookup lands on INIT instead
assert!(tree.current_context(&missing).has_context("Processor"));
```
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextTree {
    root: Context,
}

impl ContextTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Context {
        &self.root
    }

    /**
    Creates the child `name` under `path` if it is absent.

    Missing contexts along `path` are created as well.  Returns whether `name` was created.
    */
    pub fn ensure_context(&mut self, path: &[String], name: &str) -> bool {
        let mut current = &mut self.root;
        for segment in path {
            current.insert_context(segment);
            if current.has_context(segment) {
                current = current
                    .child_context_mut(segment)
                    .expect("child context checked above");
            }
        }
        current.insert_context(name)
    }

    /// Lenient lookup of the context at `path`.
    pub fn current_context(&self, path: &[String]) -> &Context {
        path.iter().fold(&self.root, |current, segment| {
            current.child_context(segment).unwrap_or(current)
        })
    }

    pub(crate) fn current_context_mut(&mut self, path: &[String]) -> &mut Context {
        let mut current = &mut self.root;
        for segment in path {
            if current.has_context(segment) {
                current = current
                    .child_context_mut(segment)
                    .expect("child context checked above");
            }
        }
        current
    }

    /// Strict lookup of the context at `path`.
    pub fn resolve(&self, path: &[String]) -> Result<&Context, PathError> {
        let mut current = &self.root;
        for (depth, segment) in path.iter().enumerate() {
            current = match current.get(segment) {
                Some(Node::Context(context)) => context,
                Some(_) => {
                    return Err(PathError::NotAContext {
                        segment: segment.clone(),
                        depth,
                    });
                }
                None => {
                    return Err(PathError::MissingSegment {
                        segment: segment.clone(),
                        depth,
                    });
                }
            };
        }
        Ok(current)
    }

    /**
    Picks a name for a new child of the context at `path`.

    `desired` is returned unchanged when it is free (or empty).  Otherwise the
    first free name among `desired_1`, `desired_2`, ... is returned.
    */
    pub fn autoname(&self, path: &[String], desired: &str) -> String {
        if desired.is_empty() {
            return String::new();
        }
        let context = self.current_context(path);
        if !context.contains(desired) {
            return desired.to_string();
        }
        (1..)
            .map(|k| format!("{desired}_{k}"))
            .find(|candidate| !context.contains(candidate))
            .expect("unbounded range yields a free name")
    }
}

fn write_context(
    f: &mut std::fmt::Formatter<'_>,
    context: &Context,
    depth: usize,
) -> std::fmt::Result {
    let indent = "|   ".repeat(depth);
    for (key, node) in context.iter() {
        match (key, node) {
            (Key::Name(name), Node::Context(child)) => {
                writeln!(f, "{indent}{name}")?;
                write_context(f, child, depth + 1)?;
            }
            (Key::Name(name), Node::Test(id)) => writeln!(f, "{indent}{name} ({id})")?,
            (Key::Index(index), Node::LogEntry(text)) => writeln!(f, "{indent}[{index}] {text}")?,
            (key, _) => writeln!(f, "{indent}{key:?}")?,
        }
    }
    Ok(())
}

/// One line per node, indented by depth.  The root prints as `/`.
impl Display for ContextTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "/")?;
        write_context(f, &self.root, 1)
    }
}
