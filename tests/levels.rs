// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests the configuration path: a textual level becomes a threshold
//! before any logging occurs, and a bad value surfaces to the caller.

use lvlog::{Flags, InMemorySink, Level, Logger, parse_level, values};
use std::sync::Arc;

fn build_from_config(level_name: &str) -> Result<(Arc<InMemorySink>, Logger), lvlog::InvalidLevel> {
    let level = parse_level(level_name)?;
    let sink = Arc::new(InMemorySink::new());
    Ok((
        sink.clone(),
        Logger::new(sink, "", Flags::empty(), level),
    ))
}

#[test]
fn configured_level_drives_the_threshold() {
    let (sink, logger) = build_from_config("WARN").expect("valid level");
    assert_eq!(logger.level(), Level::Warn);

    logger.info(&values!["dropped"]);
    assert!(sink.is_empty());
    logger.error(&values!["kept"]);
    assert_eq!(sink.contents(), "kept\n");
}

#[test]
fn misconfigured_level_fails_before_any_logging() {
    let err = build_from_config("verbose").expect_err("invalid level");
    assert_eq!(err.to_string(), "invalid level string: verbose");
}
