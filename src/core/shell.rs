//! PowerShell quoting.
//!
//! Turns a [`Value`] into a token that can be spliced into a single command
//! line. Strings are only quoted when they have to be.

use crate::literal;
use crate::value::{Scalar, Value};

/// Prefix of a PowerShell variable reference. Tokens starting with it are never quoted.
pub const VARIABLE_SIGIL: char = '$';

/// Quote a value for a PowerShell command line.
///
/// - strings: see [`quote_str`]
/// - booleans: `$true` / `$false`
/// - sequences: `@(a, b)` with every element force-quoted
/// - anything else: its plain text form, quoted like a string
pub fn quote(value: &Value, force: bool) -> String {
    match value {
        Value::Scalar(Scalar::String(s)) => quote_str(s, force),
        Value::Scalar(Scalar::Bool(true)) => "$true".to_string(),
        Value::Scalar(Scalar::Bool(false)) => "$false".to_string(),
        Value::Sequence(items) => {
            let elements: Vec<String> = items.iter().map(|item| quote(item, true)).collect();
            format!("@({})", elements.join(", "))
        }
        other => quote_str(&literal::render(other), false),
    }
}

/// Quote a string when it is empty, contains whitespace, or `force` is set,
/// unless it is a `$` variable reference. Otherwise return it unchanged.
pub fn quote_str(s: &str, force: bool) -> String {
    if needs_quoting(s, force) {
        escape(s)
    } else {
        s.to_string()
    }
}

fn needs_quoting(s: &str, force: bool) -> bool {
    !s.starts_with(VARIABLE_SIGIL) && (s.is_empty() || s.chars().any(is_whitespace) || force)
}

// Space, tab, LF, VT, FF, CR.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

// Order matters: backtick escapes first, then the double-quoted literal, then
// rewrite the literal's backslash escapes into backtick form.
fn escape(s: &str) -> String {
    let backticked = s
        .replace('`', "``")
        .replace('\0', "`0")
        .replace('\n', "`n")
        .replace('\r', "`r");

    literal::quote_str(&backticked)
        .replace("\\\"", "`\"")
        .replace("\\\\", "\\")
}

/// Quote each value and join them with spaces.
pub fn quote_all(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| quote(v, false))
        .collect::<Vec<_>>()
        .join(" ")
}
