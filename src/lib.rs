// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# lvlog

lvlog is a small leveled logging facade for Rust.

# The problem

A program that already has somewhere for its output to go — stderr, a
captured buffer, a custom destination — still needs two decisions made at
every call site: *should this message be emitted at all*, and *how do the
arguments become one line*. Threading an `if verbose` around every print
scales badly, and each call site tends to invent its own answer to the
second question.

lvlog makes both decisions once, at construction: a logger holds a minimum
severity and a line writer, and exposes per-severity methods in three
argument conventions. Messages below the threshold are dropped before any
formatting work happens. Fatal messages cannot be dropped at all: they are
written, the sink is flushed, and the process terminates.

# The API

```
use lvlog::{Flags, Level, Logger, StderrSink, values};
use std::sync::Arc;

let logger = Logger::new(
    Arc::new(StderrSink::new()),
    "app ",
    Flags::STD,
    Level::Info,
);
logger.infof("listening on %s:%d", &values!["::1", 8080]);
logger.debug(&values!["dropped at Info"]);
```

The threshold is typically read out of configuration with [parse_level],
which accepts the five names `debug`, `info`, `warn`, `error` and `fatal`
case-insensitively and reports anything else as an [InvalidLevel] error —
returned to the caller, never swallowed.

# Sinks

A [Sink] is any line-oriented destination. [StderrSink] is the reference
implementation; [InMemorySink] captures output for tests. Sinks own their
concurrency story: the facade performs no locking and simply writes in
call order per calling thread.

# What lvlog is not

No structured fields, no sampling, no async buffering, no multi-sink
fan-out, no file rotation. There is also no implicit global logger:
construct one explicitly at startup and pass it (or an `Arc` of it) to the
code that logs.
*/

mod exit;
mod format;
mod level;
mod logger;
mod macros;
mod memory;
mod record;
mod sink;
mod stderr;
mod value;
mod writer;

pub use exit::{ExitStrategy, ProcessExit};
pub use format::{sprint, sprintf, sprintln};
pub use level::{InvalidLevel, Level, parse_level};
pub use logger::Logger;
pub use memory::InMemorySink;
pub use record::Record;
pub use sink::Sink;
pub use stderr::StderrSink;
pub use value::Value;
pub use writer::{Flags, LineWriter};
