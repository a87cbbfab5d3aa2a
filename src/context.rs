// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hierarchical namespace messages and tests are filed into.
//!
//! # Overview
//!
//! - [`ContextTree`]: the tree, plus path resolution and collision-free naming
//! - [`Context`]: one node, holding sub-contexts, numbered log entries or test records
//! - [`Node`]: a child of a context, one of those three kinds
//! - [`ContextPath`]: the cursor, a list of names from the root
//!
//! Log entries are keyed by number and everything else by name, so a numbered
//! entry can never shadow a context:
//!
//! ```rust
//! use ctxlog::ContextLogger;
//!
//! let mut logger = ContextLogger::new();
//! logger.navigate_silent("INIT");
//! logger.debug("first");
//! logger.debug("second");
//!
//! let debug = logger.tree().resolve(&["INIT".to_string(), "DEBUG".to_string()]).unwrap();
//! assert_eq!(debug.entries().count(), 2);
//! assert_eq!(debug.entry(1), Some("DBG||   |   |-->|second"));
//! ```
//!
//! # Reserved names
//!
//! A context named [`TESTS`] only ever holds test records.  The logger creates it on
//! demand when a test is registered, and refuses to navigate into it.

mod node;
mod path;
mod tree;


pub use node::{Context, Key, Node};
pub use path::ContextPath;
pub use tree::{ContextTree, TESTS};
