//! snake_case ⇄ PascalCase conversion over value trees.
//!
//! Mapping keys are always converted. A mapping's values are only descended
//! into when they are mappings themselves or sequences made entirely of
//! mappings; scalar leaves and scalar/mixed sequences are copied as-is.

use regex::Regex;
use std::sync::OnceLock;

use crate::value::{Mapping, Scalar, Value};

fn acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"))
}

fn word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"))
}

/// `vm_name` → `VmName`. Empty segments are dropped.
pub fn pascalize(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// `VmName` → `vm_name`, `HTTPServer` → `http_server`, `Memory-Startup` → `memory_startup`.
pub fn snakeize(name: &str) -> String {
    let split = acronym_boundary().replace_all(name, "${1}_${2}");
    let split = word_boundary().replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
    }
}

/// Convert keys (and string/symbol values) to PascalCase.
pub fn to_pascal(value: &Value) -> Value {
    convert(value, pascalize)
}

/// Convert keys (and string/symbol values) to snake_case.
pub fn to_snake(value: &Value) -> Value {
    convert(value, snakeize)
}

fn convert(value: &Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Scalar(Scalar::String(s)) => Value::Scalar(Scalar::String(rename(s))),
        Value::Scalar(Scalar::Symbol(s)) => Value::Scalar(Scalar::Symbol(rename(s))),
        Value::Scalar(other) => Value::Scalar(other.clone()),
        Value::Sequence(items) => {
            Value::Sequence(items.iter().map(|v| convert(v, rename)).collect())
        }
        Value::Mapping(mapping) => Value::Mapping(convert_mapping(mapping, rename)),
    }
}

fn convert_mapping(mapping: &Mapping, rename: fn(&str) -> String) -> Mapping {
    mapping
        .iter()
        .map(|(key, value)| (key.map_name(rename), convert_entry_value(value, rename)))
        .collect()
}

fn convert_entry_value(value: &Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Mapping(_) => convert(value, rename),
        Value::Sequence(items) if items.iter().all(Value::is_mapping) => convert(value, rename),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Identifier;
    use serde_json::json;

    fn sym(name: &str) -> Identifier {
        Identifier::symbol(name)
    }

    #[test]
    fn pascalize_basic() {
        assert_eq!(pascalize("vm_name"), "VmName");
        assert_eq!(pascalize("name"), "Name");
        assert_eq!(pascalize("disk_size_gb"), "DiskSizeGb");
    }

    #[test]
    fn pascalize_collapses_empty_segments() {
        assert_eq!(pascalize("_vm__name_"), "VmName");
        assert_eq!(pascalize(""), "");
        assert_eq!(pascalize("___"), "");
    }

    #[test]
    fn pascalize_lowercases_segment_tails() {
        assert_eq!(pascalize("vm_NAME"), "VmName");
        assert_eq!(pascalize("VMName"), "Vmname");
    }

    #[test]
    fn snakeize_basic() {
        assert_eq!(snakeize("VmName"), "vm_name");
        assert_eq!(snakeize("Name"), "name");
        assert_eq!(snakeize("DiskSizeGb"), "disk_size_gb");
    }

    #[test]
    fn snakeize_acronyms() {
        assert_eq!(snakeize("HTTPServer"), "http_server");
        assert_eq!(snakeize("VMName"), "vm_name");
        assert_eq!(snakeize("ID"), "id");
        assert_eq!(snakeize("VMId"), "vm_id");
    }

    #[test]
    fn snakeize_digits_and_hyphens() {
        assert_eq!(snakeize("Generation2Vm"), "generation2_vm");
        assert_eq!(snakeize("Memory-Startup"), "memory_startup");
        assert_eq!(snakeize("DynamicMemory-Enabled"), "dynamic_memory_enabled");
    }

    #[test]
    fn snakeize_is_idempotent_on_snake_input() {
        for name in ["vm_name", "http_server", "a", "disk_size_gb"] {
            assert_eq!(snakeize(&snakeize(name)), snakeize(name));
            assert_eq!(snakeize(name), name);
        }
    }

    #[test]
    fn symbols_stay_symbols() {
        assert_eq!(to_snake(&Value::symbol("HTTPServer")), Value::symbol("http_server"));
        assert_eq!(to_snake(&Value::symbol("VmName")), Value::symbol("vm_name"));
        assert_eq!(to_pascal(&Value::symbol("vm_name")), Value::symbol("VmName"));
        assert_eq!(to_snake(&Value::from("VmName")), Value::from("vm_name"));
    }

    #[test]
    fn non_identifiers_pass_through() {
        for value in [Value::from(10), Value::from(true), Value::nil(), Value::from(1.5)] {
            assert_eq!(to_pascal(&value), value);
            assert_eq!(to_snake(&value), value);
        }
    }

    #[test]
    fn to_pascal_nested_mapping() {
        let input = Value::from(json!({
            "vm_name": "a",
            "nested": {"disk_size_gb": 10},
            "tags": ["a_b", "c"]
        }));
        let expected = Value::from(json!({
            "VmName": "a",
            "Nested": {"DiskSizeGb": 10},
            "Tags": ["a_b", "c"]
        }));
        assert_eq!(to_pascal(&input), expected);
    }

    #[test]
    fn scalar_values_under_keys_are_untouched() {
        let input = Value::from(json!({"state": "running_state"}));
        assert_eq!(to_pascal(&input), Value::from(json!({"State": "running_state"})));
    }

    #[test]
    fn sequences_of_mappings_are_converted() {
        let input = Value::from(json!({
            "network_adapters": [{"switch_name": "ext"}, {"switch_name": "int"}]
        }));
        let expected = Value::from(json!({
            "NetworkAdapters": [{"SwitchName": "ext"}, {"SwitchName": "int"}]
        }));
        assert_eq!(to_pascal(&input), expected);
    }

    #[test]
    fn mixed_sequences_are_untouched() {
        let input = Value::from(json!({
            "items": [{"inner_key": 1}, "plain_value"]
        }));
        let expected = Value::from(json!({
            "Items": [{"inner_key": 1}, "plain_value"]
        }));
        assert_eq!(to_pascal(&input), expected);
    }

    #[test]
    fn top_level_sequence_converts_every_element() {
        let input = Value::from(json!(["vm_name", {"cpu_count": 2}, 5]));
        let expected = Value::from(json!(["VmName", {"CpuCount": 2}, 5]));
        assert_eq!(to_pascal(&input), expected);
    }

    #[test]
    fn key_kind_is_preserved() {
        let input = Value::from(
            Mapping::new()
                .with(sym("vm_name"), "a")
                .with("memory_startup", 512),
        );
        let output = to_pascal(&input);
        let mapping = output.as_mapping().unwrap();

        assert!(mapping.contains_key(&sym("VmName")));
        assert!(mapping.contains_key(&Identifier::from("MemoryStartup")));
        assert!(!mapping.contains_key(&Identifier::from("VmName")));
    }

    #[test]
    fn colliding_keys_keep_the_last_value() {
        let input = Value::from(
            Mapping::new()
                .with(sym("vm_name"), 1)
                .with(sym("other"), 2)
                .with(sym("vm__name"), 3),
        );
        let output = to_pascal(&input);
        let mapping = output.as_mapping().unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(&sym("VmName")), Some(&Value::from(3)));
        assert_eq!(mapping.keys().next(), Some(&sym("VmName")));
    }

    #[test]
    fn snake_pascal_round_trip() {
        let original = Value::from(
            Mapping::new()
                .with(sym("vm_name"), "web01")
                .with(sym("processor_count"), 4)
                .with(
                    sym("hard_drives"),
                    Value::from(vec![Value::from(
                        Mapping::new().with(sym("controller_type"), "scsi"),
                    )]),
                )
                .with(sym("boot_order"), Value::from(vec!["network_adapter", "hard_drive"])),
        );

        assert_eq!(to_snake(&to_pascal(&original)), original);
    }

    #[test]
    fn input_is_not_modified() {
        let input = Value::from(json!({"vm_name": {"inner_key": 1}}));
        let snapshot = input.clone();
        let _ = to_pascal(&input);
        assert_eq!(input, snapshot);
    }
}
