// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-termination strategy for the fatal path.

use std::fmt::Debug;

/**
How the fatal methods terminate after emitting their line.

The production strategy is [ProcessExit]. Tests inject a recording double
so the fatal path can be asserted without killing the test process; see
the integration tests for the pattern.
*/
pub trait ExitStrategy: Debug + Send + Sync {
    /**
    Terminates with the given status.

    [ProcessExit] never returns from this call. Test doubles may return,
    in which case the logging method that invoked the strategy simply
    returns to its caller.
    */
    fn exit(&self, code: i32);
}

/**
The default strategy: [std::process::exit].

No cleanup hooks run beyond what the process-termination primitive itself
guarantees; callers needing teardown must register it with the termination
mechanism independently.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProcessExit;

impl ProcessExit {
    pub const fn new() -> Self {
        Self
    }
}

impl ExitStrategy for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code);
    }
}
