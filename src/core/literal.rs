//! Generic double-quoted literal rendering.
//!
//! This is the escaping step the PowerShell quoter builds on: it produces a
//! backslash-escaped, double-quoted literal, which `shell` then rewrites into
//! PowerShell's backtick forms. Also renders non-string values to the plain
//! text the quoter falls back to.

use crate::value::{Identifier, Mapping, Number, Scalar, Value};

/// Wrap `s` in double quotes with backslash escapes.
///
/// `"` and `\` are escaped, common control characters use their short
/// escapes, `#` is escaped ahead of `{`, `$` and `@`, and any other control
/// character becomes `\uXXXX`.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0C' => out.push_str("\\f"),
            '\x0B' => out.push_str("\\v"),
            '\x08' => out.push_str("\\b"),
            '\x07' => out.push_str("\\a"),
            '\x1B' => out.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            c if c.is_control() => {
                let code = c as u32;
                if code > 0xFFFF {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                } else {
                    out.push_str(&format!("\\u{:04X}", code));
                }
            }
            c => out.push(c),
        }
    }

    out.push('"');
    out
}

/// Plain text form of a value: nil is empty, strings and symbols are their
/// contents, containers use their literal form.
pub fn render(value: &Value) -> String {
    match value {
        Value::Scalar(Scalar::Nil) => String::new(),
        Value::Scalar(Scalar::Bool(b)) => b.to_string(),
        Value::Scalar(Scalar::Number(n)) => render_number(n),
        Value::Scalar(Scalar::String(s)) | Value::Scalar(Scalar::Symbol(s)) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) => inspect(value),
    }
}

/// Literal form of a value, as it would be written in source.
pub fn inspect(value: &Value) -> String {
    match value {
        Value::Scalar(Scalar::Nil) => "nil".to_string(),
        Value::Scalar(Scalar::Bool(b)) => b.to_string(),
        Value::Scalar(Scalar::Number(n)) => render_number(n),
        Value::Scalar(Scalar::String(s)) => quote_str(s),
        Value::Scalar(Scalar::Symbol(s)) => inspect_symbol(s),
        Value::Sequence(items) => {
            let inner: Vec<String> = items.iter().map(inspect).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Mapping(mapping) => inspect_mapping(mapping),
    }
}

fn inspect_mapping(mapping: &Mapping) -> String {
    let inner: Vec<String> = mapping
        .iter()
        .map(|(key, value)| {
            let key = match key {
                Identifier::String(name) => quote_str(name),
                Identifier::Symbol(name) => inspect_symbol(name),
            };
            format!("{}=>{}", key, inspect(value))
        })
        .collect();
    format!("{{{}}}", inner.join(", "))
}

fn inspect_symbol(name: &str) -> String {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    };

    if plain {
        format!(":{}", name)
    } else {
        format!(":{}", quote_str(name))
    }
}

/// Integers in decimal; floats always carry a fractional part and switch to
/// exponent form outside `[1e-4, 1e16)`.
pub fn render_number(n: &Number) -> String {
    match n {
        Number::Int(i) => i.to_string(),
        Number::UInt(u) => u.to_string(),
        Number::Float(f) => render_float(*f),
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = f.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = f.to_string();
        return if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        };
    }

    // Rust renders `1e20`; the literal form is `1.0e+20`.
    let text = format!("{:e}", f);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{}.0", mantissa)
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_str_plain() {
        assert_eq!(quote_str("hello world"), "\"hello world\"");
        assert_eq!(quote_str(""), "\"\"");
    }

    #[test]
    fn quote_str_escapes_quotes_and_backslashes() {
        assert_eq!(quote_str("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote_str("C:\\VMs"), "\"C:\\\\VMs\"");
    }

    #[test]
    fn quote_str_control_characters() {
        assert_eq!(quote_str("a\tb"), "\"a\\tb\"");
        assert_eq!(quote_str("\x1B[0m"), "\"\\e[0m\"");
        assert_eq!(quote_str("\x01"), "\"\\u0001\"");
        assert_eq!(quote_str("\x7F"), "\"\\u007F\"");
    }

    #[test]
    fn quote_str_interpolation_markers() {
        assert_eq!(quote_str("#{x}"), "\"\\#{x}\"");
        assert_eq!(quote_str("#$x"), "\"\\#$x\"");
        assert_eq!(quote_str("# note"), "\"# note\"");
        assert_eq!(quote_str("a#"), "\"a#\"");
    }

    #[test]
    fn quote_str_keeps_printable_unicode() {
        assert_eq!(quote_str("Größe"), "\"Größe\"");
    }

    #[test]
    fn render_scalars() {
        assert_eq!(render(&Value::nil()), "");
        assert_eq!(render(&Value::from(42)), "42");
        assert_eq!(render(&Value::from(-7)), "-7");
        assert_eq!(render(&Value::symbol("Running")), "Running");
        assert_eq!(render(&Value::from(false)), "false");
    }

    #[test]
    fn render_floats() {
        assert_eq!(render(&Value::from(2.0)), "2.0");
        assert_eq!(render(&Value::from(1.5)), "1.5");
        assert_eq!(render(&Value::from(0.0)), "0.0");
        assert_eq!(render(&Value::from(1e20)), "1.0e+20");
        assert_eq!(render(&Value::from(2.5e-5)), "2.5e-05");
    }

    #[test]
    fn render_mapping_literal() {
        let mapping = Mapping::new()
            .with(Identifier::symbol("name"), "web")
            .with("count", 2)
            .with(Identifier::symbol("tags"), Value::from(vec![Value::nil()]));
        assert_eq!(
            render(&Value::from(mapping)),
            "{:name=>\"web\", \"count\"=>2, :tags=>[nil]}"
        );
    }

    #[test]
    fn inspect_odd_symbol() {
        assert_eq!(inspect(&Value::symbol("vm-name")), ":\"vm-name\"");
        assert_eq!(inspect(&Value::symbol("vm_name")), ":vm_name");
    }
}
