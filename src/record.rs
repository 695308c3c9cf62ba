// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unit of output handed to sinks.

use crate::Level;
use std::fmt::Display;

/**
One formatted log line, accumulated as ordered parts.

The writer composes a line out of several pieces (prefix, timestamp,
source location, message). Rather than concatenating eagerly, the pieces
are kept as parts and handed to the sink together; the sink writes them in
order and appends its own line terminator.

1.  Create a new [Record] at a [Level].
2.  Progressively append parts with [Record::log] / [Record::log_owned].
3.  Submit it through [Sink::write_record](crate::Sink::write_record).
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl Record {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /**
    Appends a borrowed part to the record.
    */
    pub fn log(&mut self, part: &str) {
        self.parts.push(part.to_string());
    }

    /**
    Appends an already-owned part to the record without copying it.

    Useful for parts constructed in the process of logging.
    */
    pub fn log_owned(&mut self, part: String) {
        self.parts.push(part);
    }

    /// The severity this line was emitted at. Sinks that route by
    /// severity read it; the record itself does not interpret it.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/*
Boilerplate notes.

# Record

Clone is derived so multi-part sinks can duplicate cheaply enough.
PartialEq/Eq/Hash are derived for assertions and deduplication.  Copy is
out (heap parts).  Default is out: there is no natural default level for a
line that is about to be written.  Ord makes no sense.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_parts_in_order() {
        let mut record = Record::new(Level::Info);
        record.log("app ");
        record.log_owned(format!("{}:{} ", "main.rs", 7));
        record.log("ready");
        assert_eq!(record.to_string(), "app main.rs:7 ready");
        assert_eq!(record.level(), Level::Info);
    }

    #[test]
    fn empty_record_displays_empty() {
        assert_eq!(Record::new(Level::Debug).to_string(), "");
    }
}
