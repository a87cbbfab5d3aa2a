// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree nodes.

use crate::test_record::TestId;
use std::collections::BTreeMap;

/// Key of a child inside a [`Context`].
///
/// Log entries are numbered, everything else is named, so the two can never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    pub fn name(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

/// A child of a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested context, created by navigation or by logging at a level.
    Context(Context),
    /// One formatted log line, created by `log`.
    LogEntry(String),
    /// A registered test.  The record itself lives in the logger's test list.
    Test(TestId),
}

impl Node {
    pub fn as_context(&self) -> Option<&Context> {
        match self {
            Node::Context(context) => Some(context),
            _ => None,
        }
    }
}

/**
A named node of the context tree.

Immediate children have unique keys.  Named children are sub-contexts, except
inside a `TESTS` context where they are test records.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    children: BTreeMap<Key, Node>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of children of every kind.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(&Key::name(name))
    }

    /// Whether `name` is taken by any named child.
    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(&Key::name(name))
    }

    pub fn has_context(&self, name: &str) -> bool {
        self.child_context(name).is_some()
    }

    pub fn child_context(&self, name: &str) -> Option<&Context> {
        self.get(name).and_then(Node::as_context)
    }

    pub(crate) fn child_context_mut(&mut self, name: &str) -> Option<&mut Context> {
        match self.children.get_mut(&Key::name(name)) {
            Some(Node::Context(context)) => Some(context),
            _ => None,
        }
    }

    /// Log entry number `index`, if there is one.
    pub fn entry(&self, index: usize) -> Option<&str> {
        match self.children.get(&Key::Index(index)) {
            Some(Node::LogEntry(text)) => Some(text),
            _ => None,
        }
    }

    /// Log entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.children.iter().filter_map(|(key, node)| match (key, node) {
            (Key::Index(index), Node::LogEntry(text)) => Some((*index, text.as_str())),
            _ => None,
        })
    }

    /// Sub-contexts in name order.
    pub fn contexts(&self) -> impl Iterator<Item = (&str, &Context)> {
        self.children.iter().filter_map(|(key, node)| match (key, node) {
            (Key::Name(name), Node::Context(context)) => Some((name.as_str(), context)),
            _ => None,
        })
    }

    /// Test records in name order.
    pub fn tests(&self) -> impl Iterator<Item = (&str, TestId)> {
        self.children.iter().filter_map(|(key, node)| match (key, node) {
            (Key::Name(name), Node::Test(id)) => Some((name.as_str(), *id)),
            _ => None,
        })
    }

    pub fn contains_test(&self, id: TestId) -> bool {
        self.children
            .values()
            .any(|node| matches!(node, Node::Test(other) if *other == id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Node)> {
        self.children.iter()
    }

    /// Adds an empty sub-context unless `name` is already taken.  Returns whether one was added.
    pub(crate) fn insert_context(&mut self, name: &str) -> bool {
        let key = Key::name(name);
        if self.children.contains_key(&key) {
            return false;
        }
        self.children.insert(key, Node::Context(Context::new()));
        true
    }

    /**
    Appends a log entry and returns its index.

    The index is the number of children present before the append.
    */
    pub(crate) fn push_entry(&mut self, text: String) -> usize {
        let mut index = self.children.len();
        while self.children.contains_key(&Key::Index(index)) {
            index += 1;
        }
        self.children.insert(Key::Index(index), Node::LogEntry(text));
        index
    }

    pub(crate) fn insert_test(&mut self, name: &str, id: TestId) {
        self.children.insert(Key::name(name), Node::Test(id));
    }
}
