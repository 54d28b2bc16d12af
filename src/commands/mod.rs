use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;

pub type CmdResult<T> = hyperv_shell::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

// ============================================================================
// JSON Input Parsing (CLI layer)
// ============================================================================

/// Parse a string value into appropriate JSON type.
/// Order: JSON literal → bool → number → string
pub(crate) fn parse_value(s: &str) -> Value {
    // Try JSON first (handles arrays, objects, quoted strings)
    if let Ok(v) = serde_json::from_str(s) {
        return v;
    }
    // Try bool
    if s == "true" {
        return json!(true);
    }
    if s == "false" {
        return json!(false);
    }
    // Try number
    if let Ok(n) = s.parse::<i64>() {
        return json!(n);
    }
    if let Ok(n) = s.parse::<f64>() {
        return json!(n);
    }
    // Default to string
    json!(s)
}

/// Read JSON spec from string, file (@path), or stdin (-).
fn read_json_spec_to_string(spec: &str) -> hyperv_shell::Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(hyperv_shell::Error::validation_invalid_argument(
                "json",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
                None,
            ));
        }
        stdin.read_to_string(&mut buf).map_err(|e| {
            hyperv_shell::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
        })?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(hyperv_shell::Error::validation_invalid_argument(
                "json",
                "Invalid JSON spec '@' (missing file path)",
                None,
                None,
            ));
        }
        return std::fs::read_to_string(Path::new(path)).map_err(|e| {
            hyperv_shell::Error::internal_io(e.to_string(), Some(format!("read {}", path)))
        });
    }

    Ok(spec.to_string())
}

/// Read and parse a JSON spec into a value tree.
pub(crate) fn read_value_spec(spec: &str) -> hyperv_shell::Result<hyperv_shell::Value> {
    let raw = read_json_spec_to_string(spec)?;
    let json: Value = serde_json::from_str(&raw).map_err(|e| {
        hyperv_shell::Error::validation_invalid_json(e, Some("parse JSON spec".to_string()))
    })?;
    Ok(hyperv_shell::Value::from(json))
}

pub mod build;
pub mod check;
pub mod config;
pub mod convert;
pub mod quote;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (hyperv_shell::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Pascal(args) => {
            crate::output::map_cmd_result_to_json(convert::run_pascal(args, global))
        }
        crate::Commands::Snake(args) => {
            crate::output::map_cmd_result_to_json(convert::run_snake(args, global))
        }
        crate::Commands::Quote(args) => dispatch!(args, global, quote),
        crate::Commands::Build(args) => dispatch!(args, global, build),
        crate::Commands::Check(args) => dispatch!(args, global, check),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
