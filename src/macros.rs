// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site sugar for building operand lists.

/// Builds a `Vec<`[`Value`](crate::Value)`>` from mixed operands.
///
/// Each operand must convert into a [`Value`](crate::Value) via `From`;
/// wrap anything else in [`Value::display`](crate::Value::display).
///
/// ```
/// use lvlog::{Value, values};
///
/// let args = values!["port", 8080, true];
/// assert_eq!(args[0], Value::Str("port".to_string()));
/// assert_eq!(args[1], Value::Int(8080));
/// assert_eq!(args[2], Value::Bool(true));
///
/// let empty = values![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
