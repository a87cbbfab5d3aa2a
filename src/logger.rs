// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
An output sink for the message log.

[`ContextLogger::write_log`](crate::ContextLogger::write_log) hands every record,
in append order, to each of its loggers.
*/
pub trait Logger: Debug + Send + Sync {
    /**
        Submits the log record for output.
    */
    fn finish_log_record(&self, record: LogRecord);

    /**
    The write is complete.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Logger

I don't think Clone on Logger makes sense, so copy's out.
PartialEq and Eq are possible but it's a little unclear if we mean data equality or some kind of provenance-based thing.  Let's avoid that and not implement it.
Default is not necessarily sensible since who knows how the logger is constructed.
Send/Sync makes sense for typical loggers, and lets callers keep an Arc to a sink they handed over.
*/
