// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::Record;
use std::fmt::Debug;

pub trait Sink: Debug + Send + Sync {
    /**
    Appends one line to the destination.

    The record's parts are written in order, then the sink appends its own
    line terminator. Serialization of concurrent writers is the sink's
    contract; the facade above performs no locking of its own.
    */
    fn write_record(&self, record: Record);

    /**
    Forces any buffered output through to the destination.

    The fatal path calls this after its final line and before invoking the
    termination strategy, so the line is observable even through a
    buffering sink.
    */
    fn flush(&self);
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense for a trait object holding a unique
destination.  PartialEq/Eq are unclear (data vs provenance) so they're
avoided.  Default is not sensible since who knows what a sink needs to be
constructed (a path, a handle, etc.).  Send/Sync are required: one sink is
shared by every call site holding the logger.
*/
