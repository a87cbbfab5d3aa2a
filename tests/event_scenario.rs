// SPDX-License-Identifier: MIT OR Apache-2.0

//! An event-processing session driven the way a script would drive it: navigate,
//! log, register checks, trigger them as the event changes, write the log.

use ctxlog::{ContextLogger, InMemoryLogger, Level, TestSpec};
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;
#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

struct Event {
    id: u32,
    handled: bool,
}

fn session(logger: &mut ContextLogger) {
    let mut event = Event {
        id: 230,
        handled: false,
    };

    logger.debug("GOING TO INITIALIZATION");
    logger.navigate("INIT");
    logger.debug("Initializing ...");
    event.id = 125;
    logger.debug("ADDING AND TRIGGERING HANDLING TESTS");
    let handled = logger.add_test(TestSpec::new(|handled: &bool| *handled).name("Event handled"));
    logger.trigger_test(&handled, &event.handled);
    logger.navigate("parent");

    logger.navigate("Processor");
    logger.debug("ADDING ID_TESTS");
    let over_100 = logger.add_test(TestSpec::new(|id: &u32| *id > 100).name("Event id >100"));
    let over_150 = logger.add_test(TestSpec::new(|id: &u32| *id > 150).name("Event id >150"));
    logger.debug("TRIGGERING ID_TESTS");
    logger.trigger_test(&over_100, &event.id);
    logger.trigger_test(&over_150, &event.id);
    logger.navigate("parent");

    logger.warning("event changed !!");
    event.id = 1110;
    logger.debug("TRIGGERING ID_TESTS again");
    logger.trigger_test(&over_100, &event.id);
    logger.trigger_test(&over_150, &event.id);

    logger.navigate("mapping");
    logger.navigate("testing");
    event.handled = true;
    logger.navigate("parent");
    logger.navigate("parent");
    logger.trigger_test(&handled, &event.handled);
}

fn expected() -> Vec<&'static str> {
    vec![
        "DBG||   |-->|GOING TO INITIALIZATION",
        "WNG!|   |/!\\|Destination does not exist, creating nested context: INIT",
        "DBG||   |-->|Moving to: INIT",
        "DBG||   |   |-->|Initializing ...",
        "DBG||   |   |-->|ADDING AND TRIGGERING HANDLING TESTS",
        "DBG||   |   |-->|Created test: Event handled",
        "|/X\\|XXX|   |/X\\|Test Event handled failed!",
        "DBG||   |   |-->|Moving to parent folder",
        "WNG!|   |/!\\|Destination does not exist, creating nested context: Processor",
        "DBG||   |-->|Moving to: Processor",
        "DBG||   |   |-->|ADDING ID_TESTS",
        "DBG||   |   |-->|Created test: Event id >100",
        "DBG||   |   |-->|Created test: Event id >150",
        "DBG||   |   |-->|TRIGGERING ID_TESTS",
        "C==============3|Test Event id >100 passed :D",
        "|/X\\|XXX|   |/X\\|Test Event id >150 failed!",
        "DBG||   |   |-->|Moving to parent folder",
        "WNG!|   |/!\\|event changed !!",
        "DBG||   |-->|TRIGGERING ID_TESTS again",
        "WNG!|   |/!\\|Not in the correct context to trigger the test",
        "C======3|Event id >100 was Passed, still is:",
        "C==============3|Test Event id >100 passed :D",
        "WNG!|   |/!\\|Not in the correct context to trigger the test",
        "C======3|Event id >150 was Failed, now is:",
        "C==============3|Test Event id >150 passed :D",
        "WNG!|   |/!\\|Destination does not exist, creating nested context: mapping",
        "DBG||   |-->|Moving to: mapping",
        "WNG!|   |   |/!\\|Destination does not exist, creating nested context: testing",
        "DBG||   |   |-->|Moving to: testing",
        "DBG||   |   |   |-->|Moving to parent folder",
        "DBG||   |   |-->|Moving to parent folder",
        "WNG!|   |/!\\|Not in the correct context to trigger the test",
        "C======3|Event handled was Failed, now is:",
        "C==============3|Test Event handled passed :D",
    ]
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn session_transcript() {
    let sink = Arc::new(InMemoryLogger::new());
    let mut logger = ContextLogger::new();
    logger.set_loggers(vec![sink.clone()]);

    session(&mut logger);
    logger.write_log();

    assert_eq!(sink.lines(), expected());
    assert!(logger.path().is_root());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn session_leaves_every_test_passing() {
    let mut logger = ContextLogger::new();
    logger.set_loggers(Vec::new());
    session(&mut logger);

    let names: Vec<&str> = logger.tests().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Event handled", "Event id >100", "Event id >150"]);
    assert!(logger.tests().iter().all(|t| t.triggered() && t.passed()));

    let over_150 = &logger.tests()[2];
    assert_eq!(
        over_150.output(),
        &[
            "|/X\\|XXX|   |/X\\|Test Event id >150 failed!".to_string(),
            "C======3|Event id >150 was Failed, now is:".to_string(),
            format!("C==={}===3|Test Event id >150 passed :D", "====".repeat(2)),
        ]
    );
    assert_eq!(over_150.context().to_string(), "/Processor");
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn session_tree_layout() {
    let mut logger = ContextLogger::new();
    logger.set_loggers(Vec::new());
    session(&mut logger);

    let tree = logger.tree();
    let root = tree.root();
    for name in ["DEBUG", "WARNING", "INIT", "Processor", "mapping"] {
        assert!(root.has_context(name), "missing {name}");
    }
    assert!(!root.has_context("TESTS"));

    let tests = tree
        .resolve(&["Processor".to_string(), "TESTS".to_string()])
        .unwrap();
    let stored: Vec<&str> = tests.tests().map(|(name, _)| name).collect();
    assert_eq!(stored, vec!["Event id >100", "Event id >150"]);

    assert!(tree
        .resolve(&["mapping".to_string(), "testing".to_string()])
        .is_ok());
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn filtered_write_keeps_warnings_only() {
    let sink = Arc::new(InMemoryLogger::new());
    let mut logger = ContextLogger::with_level(Level::Warning);
    logger.set_loggers(vec![sink.clone()]);
    session(&mut logger);

    logger.write_log_filtered();
    let records = sink.records();
    let warnings = logger
        .messages()
        .iter()
        .filter(|r| r.level() == &Level::Warning)
        .count();
    assert_eq!(records.len(), warnings);
    assert!(records.iter().all(|r| r.text().starts_with("WNG!")));

    logger.set_level(Level::Info);
    logger.write_log_filtered();
    assert_eq!(sink.len(), warnings + logger.messages().len());
}
