//! Lua literal formatting.

use std::fmt::Write;

/// Formats a number as a Lua literal.
///
/// Uses the shortest representation that round-trips, which always carries a
/// decimal point or exponent (`100.0`, `1.5707963267948966`, `1e16`).
/// The value must be finite.
pub fn number(value: f64) -> String {
    format!("{:?}", value)
}

/// Formats numbers as a comma-separated Lua argument list.
pub fn numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| number(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a string as a double-quoted Lua literal.
pub fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Fixed width keeps a following digit out of the escape.
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
