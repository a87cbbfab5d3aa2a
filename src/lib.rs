//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# ctxlog

ctxlog is a logger that files messages into a tree of named contexts, and lets you
attach small checks ("tests") to those contexts that can be triggered over and over
against changing values.

# The problem

Print-style debugging of an event-driven program produces a flat wall of text.  What
you usually want to know is *where* you were (initialization?  the processor?  the
mapping stage?) and *whether the thing you care about held*, and whether that changed
since last time.

# Contexts

A [`ContextLogger`] has a cursor into a tree of contexts, much like a working
directory.  [`ContextLogger::navigate`] moves it, creating contexts on demand, and
`"parent"` moves back up.  Every message is filed under a child context named after
its level, and its indentation shows how deep the cursor was.

```rust
use ctxlog::ContextLogger;

let mut logger = ContextLogger::new();
logger.navigate("INIT");
logger.debug("Initializing ...");
logger.navigate("parent");
assert!(logger.path().is_root());
```

# Tests

A test is a predicate over one value plus an expected result.  Triggering it appends
its pass or fail message to the log; re-triggering first notes whether the outcome
changed.

```rust
use ctxlog::{ContextLogger, TestSpec};

let mut logger = ContextLogger::new();
let over_100 = logger.add_test(TestSpec::new(|id: &u32| *id > 100).name(">100"));
logger.trigger_test(&over_100, &50);
logger.trigger_test(&over_100, &200);

let lines: Vec<&str> = logger.messages().iter().map(|r| r.text()).collect();
assert!(lines.contains(&"C======3|>100 was Failed, now is:"));
assert!(lines.contains(&"C==========3|Test >100 passed :D"));
```

# Output

Nothing is printed until [`ContextLogger::write_log`] hands the whole message log,
in order, to the logger's sinks.  The default sink is [`StdOutLogger`]; tests usually
swap in an [`InMemoryLogger`].

# Failure

Nothing in the logging, navigation or test API fails.  Unexpected situations, such
as moving above the root or triggering a test from the wrong context, are reported
as diagnostics in the message log and execution carries on.
*/

mod context_logger;
pub mod context;
mod error;
mod format;
mod inmemory_logger;
mod level;
mod log_record;
mod logger;
mod macros;
mod stdout_logger;
mod test_record;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub use context_logger::{ContextLogger, PARENT};
pub use error::{ParseLevelError, PathError};
pub use format::format_message;
pub use inmemory_logger::InMemoryLogger;
pub use level::Level;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use stdout_logger::StdOutLogger;
pub use test_record::{TestHandle, TestId, TestRecord, TestSpec};
