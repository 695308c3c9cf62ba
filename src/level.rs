// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels and the textual level codec.

use std::str::FromStr;

/// Error returned when a level name matches none of the five recognized
/// severities.
///
/// Carries the original, non-lowercased input so operators see exactly the
/// value that was misconfigured. The codec returns this to its caller; it
/// is never logged internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid level string: {0}")]
pub struct InvalidLevel(pub String);

/// Message severity, ordered from most routine to most urgent.
///
/// The set is closed: a severity outside these five cannot be constructed,
/// so threshold comparisons never see an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Level {
    /// Routine diagnostics, usually filtered out in production
    Debug = 0,
    /// Normal operational messages
    Info = 1,
    /// Suspicious condition
    Warn = 2,
    /// Runtime error
    Error = 3,
    /// Unrecoverable condition; always emitted, always followed by process
    /// termination
    Fatal = 4,
}

impl Level {
    /// The canonical lower-case name, as the codec accepts it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    /// Case-insensitive match against the five recognized names. No
    /// trimming, no partial matching, no numeric input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(InvalidLevel(s.to_string())),
        }
    }
}

/// Converts a level name to a [Level].
///
/// Equivalent to `name.parse()`; provided for call sites that read the
/// level out of configuration.
///
/// ```
/// use lvlog::{Level, parse_level};
///
/// assert_eq!(parse_level("WARN").unwrap(), Level::Warn);
/// assert!(parse_level("verbose").is_err());
/// ```
pub fn parse_level(name: &str) -> Result<Level, InvalidLevel> {
    name.parse()
}

/*
Boilerplate notes.

# Level

Copy is obvious for a field-less enum.  Ord is the point of the type: the
threshold comparison is `<=` on these variants, so the declaration order is
a contract.  Default is deliberately absent; there is no universally safe
default severity and constructors should be explicit.  Serialize/Deserialize
are left to callers via as_str/FromStr.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_names_case_insensitively() {
        let cases = [
            ("debug", Level::Debug),
            ("DEBUG", Level::Debug),
            ("info", Level::Info),
            ("Info", Level::Info),
            ("warn", Level::Warn),
            ("WaRn", Level::Warn),
            ("error", Level::Error),
            ("ERROR", Level::Error),
            ("fatal", Level::Fatal),
            ("Fatal", Level::Fatal),
        ];
        for (name, expected) in cases {
            assert_eq!(parse_level(name).unwrap(), expected, "parsing {name:?}");
        }
    }

    #[test]
    fn rejects_unrecognized_names_with_original_input() {
        for bad in ["", "warning", " info", "info ", "2", "Tracing"] {
            let err = parse_level(bad).unwrap_err();
            assert_eq!(err, InvalidLevel(bad.to_string()));
            assert_eq!(err.to_string(), format!("invalid level string: {bad}"));
        }
    }

    #[test]
    fn ordering_is_total_and_fixed() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn displays_canonical_name() {
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::Fatal.as_str(), "fatal");
    }
}
