// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::logger::Logger;
#[cfg(any(target_arch = "wasm32", test))]
use crate::Level;

/**
A reference logger that writes each record as one line on stdout.

This is the sink a fresh [`ContextLogger`](crate::ContextLogger) starts with.  On
wasm32 there is no stdout, so records go to the browser console instead, picking the
console method from the record's level.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdOutLogger {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone/Copy: zero-sized, no heap allocation
// - PartialEq/Eq/Hash: all instances are equivalent
// - Default: convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation for a stdout logger

impl StdOutLogger {
    pub const fn new() -> Self {
        Self {}
    }
}

/// Browser console method a record is sent to on wasm32.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Console {
    Log,
    Info,
    Debug,
    Warn,
    Error,
}

#[cfg(any(target_arch = "wasm32", test))]
impl Console {
    fn for_level(level: &Level) -> Self {
        match level.as_str() {
            "INFO" => Console::Info,
            "DEBUG" => Console::Debug,
            "WARNING" | "FAIL" => Console::Warn,
            "ERROR" => Console::Error,
            _ => Console::Log,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn write(self, msg: String) {
        let msg = wasm_bindgen::JsValue::from(msg);
        match self {
            Console::Log => web_sys::console::log_1(&msg),
            Console::Info => web_sys::console::info_1(&msg),
            Console::Debug => web_sys::console::debug_1(&msg),
            Console::Warn => web_sys::console::warn_1(&msg),
            Console::Error => web_sys::console::error_1(&msg),
        }
    }
}

impl Logger for StdOutLogger {
    fn finish_log_record(&self, record: LogRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stdout().lock();
            lock.write_all(record.text().as_bytes())
                .expect("Can't log to stdout");
            lock.write_all(b"\n").expect("Can't log to stdout");
        }
        #[cfg(target_arch = "wasm32")]
        {
            let console = Console::for_level(record.level());
            console.write(record.into_text());
        }
    }

    fn prepare_to_die(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            std::io::stdout().lock().flush().expect("Can't flush stdout");
        }
    }
}
