// SPDX-License-Identifier: MIT OR Apache-2.0

//! The line-writing primitive the leveled facade wraps.
//!
//! A [LineWriter] owns the layout of every emitted line: prefix placement,
//! flag-driven timestamp and source-location fields, and the hand-off to
//! the sink. The facade above it forwards prefix and [Flags] verbatim and
//! never interprets them.

use crate::Level;
use crate::record::Record;
use crate::sink::Sink;
use bitflags::bitflags;
use std::panic::Location;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

bitflags! {
    /// Output-formatting options for a [LineWriter].
    ///
    /// Bit values are stable, so deployments that carry the flag word as a
    /// number in configuration keep their meaning across versions.
    pub struct Flags: u32 {
        /// Date in the local time zone: `2009/01/23`.
        const DATE = 1 << 0;
        /// Time in the local time zone: `01:23:23`.
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies TIME.
        const MICROSECONDS = 1 << 2;
        /// Full file path and line number of the call site: `src/a/b.rs:23: `.
        const LONG_FILE = 1 << 3;
        /// Final path element and line number: `b.rs:23: `. Overrides
        /// LONG_FILE.
        const SHORT_FILE = 1 << 4;
        /// Use UTC rather than the local time zone for DATE and TIME.
        const UTC = 1 << 5;
        /// Move the prefix from the beginning of the line to just before
        /// the message.
        const MSG_PREFIX = 1 << 6;
        /// Initial values for a conventional logger.
        const STD = Self::DATE.bits | Self::TIME.bits;
    }
}

const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month padding:zero]/[day padding:zero]");
const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]");
const MICRO_FORMAT: &[FormatItem<'static>] = format_description!(".[subsecond digits:6]");

/**
The wrapped line-writing primitive.

Composes prefix, optional timestamp, optional source location and the
message into a [Record], then hands the record to the sink. Configuration
is fixed at construction; concurrent use is safe because every field is
read-only and write serialization is the sink's contract.
*/
#[derive(Debug, Clone)]
pub struct LineWriter {
    sink: Arc<dyn Sink>,
    prefix: String,
    flags: Flags,
}

impl LineWriter {
    pub fn new(sink: Arc<dyn Sink>, prefix: &str, flags: Flags) -> Self {
        Self {
            sink,
            prefix: prefix.to_string(),
            flags,
        }
    }

    /// The prefix prepended to every line (or placed before the message
    /// under [Flags::MSG_PREFIX]).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The formatting flags this writer applies.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Forces buffered output through the sink.
    pub fn flush(&self) {
        self.sink.flush();
    }

    /**
    Composes one line and writes it through the sink.

    `location` is the call site to render under [Flags::SHORT_FILE] /
    [Flags::LONG_FILE]; the facade captures it with `#[track_caller]`.
    */
    pub fn output(&self, level: Level, location: &Location<'_>, message: &str) {
        let mut record = Record::new(level);
        if !self.prefix.is_empty() && !self.flags.contains(Flags::MSG_PREFIX) {
            record.log(&self.prefix);
        }
        if self
            .flags
            .intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
        {
            let now = if self.flags.contains(Flags::UTC) {
                OffsetDateTime::now_utc()
            } else {
                // local offset can be indeterminate in multithreaded processes
                OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
            };
            if self.flags.contains(Flags::DATE) {
                record.log_owned(format_timestamp(now, DATE_FORMAT));
                record.log(" ");
            }
            if self.flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
                record.log_owned(format_timestamp(now, TIME_FORMAT));
                if self.flags.contains(Flags::MICROSECONDS) {
                    record.log_owned(format_timestamp(now, MICRO_FORMAT));
                }
                record.log(" ");
            }
        }
        if self.flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
            let file = location.file();
            let file = if self.flags.contains(Flags::SHORT_FILE) {
                file.rsplit(['/', '\\']).next().unwrap_or(file)
            } else {
                file
            };
            record.log_owned(format!("{}:{}: ", file, location.line()));
        }
        if !self.prefix.is_empty() && self.flags.contains(Flags::MSG_PREFIX) {
            record.log(&self.prefix);
        }
        record.log(message);
        self.sink.write_record(record);
    }
}

fn format_timestamp(at: OffsetDateTime, format: &[FormatItem<'_>]) -> String {
    at.format(format).expect("Can't format timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemorySink;

    fn writer(prefix: &str, flags: Flags) -> (Arc<InMemorySink>, LineWriter) {
        let sink = Arc::new(InMemorySink::new());
        (sink.clone(), LineWriter::new(sink, prefix, flags))
    }

    #[test]
    fn bare_writer_emits_message_only() {
        let (sink, writer) = writer("", Flags::empty());
        writer.output(Level::Info, Location::caller(), "hello");
        assert_eq!(sink.contents(), "hello\n");
    }

    #[test]
    fn prefix_leads_the_line_by_default() {
        let (sink, writer) = writer("app: ", Flags::empty());
        writer.output(Level::Info, Location::caller(), "hello");
        assert_eq!(sink.contents(), "app: hello\n");
    }

    #[test]
    fn msg_prefix_moves_the_prefix_before_the_message() {
        let (sink, writer) = writer("app: ", Flags::SHORT_FILE | Flags::MSG_PREFIX);
        writer.output(Level::Info, Location::caller(), "hello");
        let line = sink.drain();
        assert!(line.starts_with("writer.rs:"), "got {line:?}");
        assert!(line.ends_with(": app: hello\n"), "got {line:?}");
    }

    #[test]
    fn short_file_keeps_the_final_path_element() {
        let (sink, writer) = writer("", Flags::SHORT_FILE | Flags::LONG_FILE);
        writer.output(Level::Info, Location::caller(), "x");
        let line = sink.drain();
        assert!(line.starts_with("writer.rs:"), "got {line:?}");
    }

    #[test]
    fn long_file_keeps_the_whole_path() {
        let (sink, writer) = writer("", Flags::LONG_FILE);
        writer.output(Level::Info, Location::caller(), "x");
        let line = sink.drain();
        assert!(line.starts_with("src") && line.contains("writer.rs:"), "got {line:?}");
    }

    #[test]
    fn std_flags_render_date_and_time_fields() {
        let (sink, writer) = writer("", Flags::STD | Flags::UTC);
        writer.output(Level::Info, Location::caller(), "msg");
        let line = sink.drain();
        let trimmed = line.trim_end();
        let fields: Vec<&str> = trimmed.splitn(3, ' ').collect();
        assert_eq!(fields.len(), 3, "got {line:?}");
        // 2009/01/23
        assert_eq!(fields[0].len(), 10, "got {line:?}");
        assert_eq!(fields[0].matches('/').count(), 2, "got {line:?}");
        // 01:23:23
        assert_eq!(fields[1].len(), 8, "got {line:?}");
        assert_eq!(fields[1].matches(':').count(), 2, "got {line:?}");
        assert_eq!(fields[2], "msg");
    }

    #[test]
    fn microseconds_imply_the_time_field() {
        let (sink, writer) = writer("", Flags::MICROSECONDS | Flags::UTC);
        writer.output(Level::Info, Location::caller(), "msg");
        let line = sink.drain();
        let trimmed = line.trim_end();
        let fields: Vec<&str> = trimmed.splitn(2, ' ').collect();
        // 01:23:23.123123
        assert_eq!(fields[0].len(), 15, "got {line:?}");
        assert_eq!(fields[0].matches(':').count(), 2, "got {line:?}");
        assert_eq!(fields[0].matches('.').count(), 1, "got {line:?}");
        assert_eq!(fields[1], "msg");
    }

    #[test]
    fn flag_bits_are_stable() {
        assert_eq!(Flags::DATE.bits(), 1);
        assert_eq!(Flags::TIME.bits(), 2);
        assert_eq!(Flags::MICROSECONDS.bits(), 4);
        assert_eq!(Flags::LONG_FILE.bits(), 8);
        assert_eq!(Flags::SHORT_FILE.bits(), 16);
        assert_eq!(Flags::UTC.bits(), 32);
        assert_eq!(Flags::MSG_PREFIX.bits(), 64);
        assert_eq!(Flags::STD.bits(), 3);
    }
}
