// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three argument-passing conventions.
//!
//! [sprint], [sprintln] and [sprintf] turn a slice of [Value] operands into
//! the single line a logging method hands to its writer. They are plain
//! functions so the join and interpolation rules can be tested without a
//! logger in the loop.

use crate::value::Value;

/// Space-joined rendering.
///
/// Operands are concatenated in order; a single separating space is
/// inserted only between adjacent operands that are both non-strings.
///
/// ```
/// use lvlog::{sprint, values};
///
/// assert_eq!(sprint(&values!["a", "b"]), "ab");
/// assert_eq!(sprint(&values![1, 2]), "1 2");
/// ```
pub fn sprint(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 && !args[i - 1].is_str() && !arg.is_str() {
            out.push(' ');
        }
        out.push_str(&arg.to_string());
    }
    out
}

/// Newline-joined rendering.
///
/// A space between every pair of operands, and a trailing newline after the
/// whole line. The newline is in addition to whatever terminator the sink
/// appends.
pub fn sprintln(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&arg.to_string());
    }
    out.push('\n');
    out
}

/// Printf-style rendering.
///
/// Supported verbs: `%v` (default form of any operand), `%s` (strings),
/// `%d` (integers), `%f` (floats, six decimal places), `%t` (booleans) and
/// the literal `%%`. Operand mismatches are surfaced inline rather than
/// returned as errors: a missing operand renders as `%!<verb>(MISSING)`,
/// leftover operands are appended as `%!(EXTRA kind=value, ...)`, and a
/// verb applied to the wrong kind of operand — or an unrecognized verb —
/// renders as `%!<verb>(kind=value)`.
///
/// ```
/// use lvlog::{sprintf, values};
///
/// assert_eq!(sprintf("%s=%d", &values!["x", 5]), "x=5");
/// ```
pub fn sprintf(template: &str, args: &[Value]) -> String {
    let mut out = String::new();
    let mut operands = args.iter();
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push_str("%!(NOVERB)"),
            Some('%') => out.push('%'),
            Some(verb) => match operands.next() {
                None => {
                    out.push_str("%!");
                    out.push(verb);
                    out.push_str("(MISSING)");
                }
                Some(arg) => format_verb(&mut out, verb, arg),
            },
        }
    }
    let extra: Vec<&Value> = operands.collect();
    if !extra.is_empty() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in extra.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(arg.kind());
            out.push('=');
            out.push_str(&arg.to_string());
        }
        out.push(')');
    }
    out
}

fn format_verb(out: &mut String, verb: char, arg: &Value) {
    match (verb, arg) {
        ('v', _) => out.push_str(&arg.to_string()),
        ('s', Value::Str(s)) => out.push_str(s),
        ('s', Value::Display(s)) => out.push_str(s),
        ('d', Value::Int(v)) => out.push_str(&v.to_string()),
        ('f', Value::Float(v)) => out.push_str(&format!("{v:.6}")),
        ('t', Value::Bool(v)) => out.push_str(&v.to_string()),
        _ => {
            // mismatch or unknown verb; the operand is consumed either way
            out.push_str(&format!("%!{verb}({}={arg})", arg.kind()));
        }
    }
}
