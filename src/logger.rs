// SPDX-License-Identifier: MIT OR Apache-2.0

//! The leveled facade.

use crate::Level;
use crate::exit::{ExitStrategy, ProcessExit};
use crate::format::{sprint, sprintf, sprintln};
use crate::sink::Sink;
use crate::value::Value;
use crate::writer::{Flags, LineWriter};
use std::panic::Location;
use std::sync::Arc;

/**
A leveled logger: a minimum severity in front of a [LineWriter].

Every logging method compares its severity against the configured minimum
and silently drops the message when it falls below — the comparison runs
before any formatting work. The fatal methods skip the comparison
entirely: they emit, flush the sink and terminate the process.

Configuration is fixed at construction. A `Logger` may be shared across
threads; all of its state is read-only after construction and write
serialization is the sink's contract.
*/
#[derive(Debug, Clone)]
pub struct Logger {
    writer: LineWriter,
    level: Level,
    exit: Arc<dyn ExitStrategy>,
}

impl Logger {
    /**
    Creates a logger emitting at `level` and above.

    `prefix` and `flags` pass through to the wrapped [LineWriter]
    uninterpreted. Fatal calls terminate via [ProcessExit].
    */
    pub fn new(sink: Arc<dyn Sink>, prefix: &str, flags: Flags, level: Level) -> Self {
        Self::with_exit_strategy(sink, prefix, flags, level, Arc::new(ProcessExit::new()))
    }

    /**
    Like [Logger::new], but with an injected termination strategy for the
    fatal path. Intended for tests that assert fatal emission without
    exiting the test process.
    */
    pub fn with_exit_strategy(
        sink: Arc<dyn Sink>,
        prefix: &str,
        flags: Flags,
        level: Level,
        exit: Arc<dyn ExitStrategy>,
    ) -> Self {
        Self {
            writer: LineWriter::new(sink, prefix, flags),
            level,
            exit,
        }
    }

    /// The configured minimum severity.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The prefix the wrapped writer places on every line.
    pub fn prefix(&self) -> &str {
        self.writer.prefix()
    }

    /// The formatting flags the wrapped writer applies.
    pub fn flags(&self) -> Flags {
        self.writer.flags()
    }

    /// Whether a message at `level` would be emitted. Useful for skipping
    /// expensive operand construction ahead of a call.
    pub fn enabled(&self, level: Level) -> bool {
        self.level <= level
    }

    /// Logs a formatted message if the minimum severity is Debug.
    /// Arguments are handled in the manner of [sprintf].
    #[track_caller]
    pub fn debugf(&self, template: &str, args: &[Value]) {
        if self.level > Level::Debug {
            return;
        }
        self.writer
            .output(Level::Debug, Location::caller(), &sprintf(template, args));
    }

    /// Logs a message if the minimum severity is Debug. Arguments are
    /// handled in the manner of [sprint].
    #[track_caller]
    pub fn debug(&self, args: &[Value]) {
        if self.level > Level::Debug {
            return;
        }
        self.writer
            .output(Level::Debug, Location::caller(), &sprint(args));
    }

    /// Logs a message if the minimum severity is Debug. Arguments are
    /// handled in the manner of [sprintln].
    #[track_caller]
    pub fn debugln(&self, args: &[Value]) {
        if self.level > Level::Debug {
            return;
        }
        self.writer
            .output(Level::Debug, Location::caller(), &sprintln(args));
    }

    /// Logs a formatted message if the minimum severity is Info or lower.
    /// Arguments are handled in the manner of [sprintf].
    #[track_caller]
    pub fn infof(&self, template: &str, args: &[Value]) {
        if self.level > Level::Info {
            return;
        }
        self.writer
            .output(Level::Info, Location::caller(), &sprintf(template, args));
    }

    /// Logs a message if the minimum severity is Info or lower. Arguments
    /// are handled in the manner of [sprint].
    #[track_caller]
    pub fn info(&self, args: &[Value]) {
        if self.level > Level::Info {
            return;
        }
        self.writer
            .output(Level::Info, Location::caller(), &sprint(args));
    }

    /// Logs a message if the minimum severity is Info or lower. Arguments
    /// are handled in the manner of [sprintln].
    #[track_caller]
    pub fn infoln(&self, args: &[Value]) {
        if self.level > Level::Info {
            return;
        }
        self.writer
            .output(Level::Info, Location::caller(), &sprintln(args));
    }

    /// Logs a formatted message if the minimum severity is Warn or lower.
    /// Arguments are handled in the manner of [sprintf].
    #[track_caller]
    pub fn warnf(&self, template: &str, args: &[Value]) {
        if self.level > Level::Warn {
            return;
        }
        self.writer
            .output(Level::Warn, Location::caller(), &sprintf(template, args));
    }

    /// Logs a message if the minimum severity is Warn or lower. Arguments
    /// are handled in the manner of [sprint].
    #[track_caller]
    pub fn warn(&self, args: &[Value]) {
        if self.level > Level::Warn {
            return;
        }
        self.writer
            .output(Level::Warn, Location::caller(), &sprint(args));
    }

    /// Logs a message if the minimum severity is Warn or lower. Arguments
    /// are handled in the manner of [sprintln].
    #[track_caller]
    pub fn warnln(&self, args: &[Value]) {
        if self.level > Level::Warn {
            return;
        }
        self.writer
            .output(Level::Warn, Location::caller(), &sprintln(args));
    }

    /// Logs a formatted message if the minimum severity is Error or lower.
    /// Arguments are handled in the manner of [sprintf].
    #[track_caller]
    pub fn errorf(&self, template: &str, args: &[Value]) {
        if self.level > Level::Error {
            return;
        }
        self.writer
            .output(Level::Error, Location::caller(), &sprintf(template, args));
    }

    /// Logs a message if the minimum severity is Error or lower. Arguments
    /// are handled in the manner of [sprint].
    #[track_caller]
    pub fn error(&self, args: &[Value]) {
        if self.level > Level::Error {
            return;
        }
        self.writer
            .output(Level::Error, Location::caller(), &sprint(args));
    }

    /// Logs a message if the minimum severity is Error or lower. Arguments
    /// are handled in the manner of [sprintln].
    #[track_caller]
    pub fn errorln(&self, args: &[Value]) {
        if self.level > Level::Error {
            return;
        }
        self.writer
            .output(Level::Error, Location::caller(), &sprintln(args));
    }

    /// Logs a formatted message at Fatal severity, then terminates the
    /// process with a failure status. Never subject to the threshold.
    /// Arguments are handled in the manner of [sprintf].
    #[track_caller]
    pub fn fatalf(&self, template: &str, args: &[Value]) {
        self.writer
            .output(Level::Fatal, Location::caller(), &sprintf(template, args));
        self.writer.flush();
        self.exit.exit(1);
    }

    /// Logs a message at Fatal severity, then terminates the process with
    /// a failure status. Never subject to the threshold. Arguments are
    /// handled in the manner of [sprint].
    #[track_caller]
    pub fn fatal(&self, args: &[Value]) {
        self.writer
            .output(Level::Fatal, Location::caller(), &sprint(args));
        self.writer.flush();
        self.exit.exit(1);
    }

    /// Logs a message at Fatal severity, then terminates the process with
    /// a failure status. Never subject to the threshold. Arguments are
    /// handled in the manner of [sprintln].
    #[track_caller]
    pub fn fatalln(&self, args: &[Value]) {
        self.writer
            .output(Level::Fatal, Location::caller(), &sprintln(args));
        self.writer.flush();
        self.exit.exit(1);
    }
}

/*
Boilerplate notes.

# Logger

Clone is derived: a clone shares the same sink and exit strategy through
their Arcs, which is exactly what handing a logger to another subsystem
should mean.  PartialEq/Eq are avoided (data vs provenance is unclear).
Default is not sensible since a logger can't exist without a sink.
*/
