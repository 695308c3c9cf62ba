// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and programmatic
//! inspection. The [InMemorySink] captures lines in memory rather than
//! writing them to stderr or another destination, making it useful for:
//!
//! - Unit testing code that logs, asserting exactly what was emitted
//! - Capturing output where stderr is redirected or unavailable
//! - Examining below/above-threshold behavior byte-for-byte
//!
//! Internally the sink is a `Mutex<Vec<String>>`, so multiple threads can
//! write concurrently while readers see a consistent view.

use crate::record::Record;
use crate::sink::Sink;
use std::sync::Mutex;

/// A sink that captures lines in memory instead of writing them out.
///
/// Thread-safe; share across threads (and with a [Logger](crate::Logger))
/// via `Arc`.
///
/// # Example
///
/// ```
/// use lvlog::{Flags, InMemorySink, Level, Logger, values};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::new(sink.clone(), "", Flags::empty(), Level::Info);
///
/// logger.info(&values!["ready"]);
///
/// assert_eq!(sink.contents(), "ready\n");
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// Creates a new `InMemorySink` with an empty buffer.
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Everything captured so far, in write order, each line carrying the
    /// terminator the sink appended. Does not clear the buffer.
    pub fn contents(&self) -> String {
        let lines = self.lines.lock().unwrap();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Returns the captured output like [InMemorySink::contents] and
    /// clears the buffer, so subsequent calls start from empty.
    pub fn drain(&self) -> String {
        let mut lines = self.lines.lock().unwrap();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        lines.clear();
        out
    }

    /// True when nothing has been captured since construction or the last
    /// [InMemorySink::drain].
    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }
}

/// Captures each record by rendering its parts into one stored line.
impl Sink for InMemorySink {
    fn write_record(&self, record: Record) {
        let line = record.to_string();
        let mut lines = self.lines.lock().unwrap();
        lines.push(line);
    }

    /// No-op: memory needs no flushing.
    fn flush(&self) {}
}

/*
Boilerplate notes.

# InMemorySink

Default has an obvious zero value (empty buffer).  Clone is NOT implemented:
duplicating a capture buffer mid-test invites confusion about which copy
received what.  PartialEq/Eq/Hash are out for the usual mutex-state reasons.
Send/Sync come from the Mutex, which the Sink trait requires anyway.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn captures_lines_with_terminators() {
        let sink = InMemorySink::new();
        assert!(sink.is_empty());

        let mut record = Record::new(Level::Info);
        record.log("first");
        sink.write_record(record);

        let mut record = Record::new(Level::Warn);
        record.log("second");
        sink.write_record(record);

        assert_eq!(sink.contents(), "first\nsecond\n");
        // contents() is non-destructive
        assert_eq!(sink.contents(), "first\nsecond\n");
    }

    #[test]
    fn drain_clears_the_buffer() {
        let sink = InMemorySink::new();
        let mut record = Record::new(Level::Error);
        record.log("once");
        sink.write_record(record);

        assert_eq!(sink.drain(), "once\n");
        assert!(sink.is_empty());
        assert_eq!(sink.drain(), "");
    }
}
