//! The value tree exchanged with PowerShell.
//!
//! A closed sum type: every branch in the converters and the quoter is an
//! exhaustive match over [`Value`].

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    /// Only used for values that do not fit in `i64`.
    UInt(u64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Nil,
    Bool(bool),
    Number(Number),
    String(String),
    Symbol(String),
}

/// A mapping key. Symbols and strings stay distinct through conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    String(String),
    Symbol(String),
}

impl Identifier {
    pub fn string(name: impl Into<String>) -> Self {
        Identifier::String(name.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Identifier::Symbol(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Identifier::String(name) | Identifier::Symbol(name) => name,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Identifier::Symbol(_))
    }

    /// Rename, keeping the string/symbol kind.
    pub(crate) fn map_name(&self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Identifier::String(name) => Identifier::String(f(name)),
            Identifier::Symbol(name) => Identifier::Symbol(f(name)),
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::String(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::String(name)
    }
}

/// Insertion-ordered map with unique keys.
///
/// Re-inserting a key replaces the value in place. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(Identifier, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace; returns the previous value for `key`.
    pub fn insert(&mut self, key: Identifier, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<Identifier>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &Identifier) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Identifier) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &Identifier) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(Identifier, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (Identifier, Value)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (Identifier, Value);
    type IntoIter = std::vec::IntoIter<(Identifier, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn nil() -> Self {
        Value::Scalar(Scalar::Nil)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::Scalar(Scalar::String(value.into()))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Symbol(name.into()))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Nil))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Look up a string-keyed entry, falling back to the symbol with the same name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let mapping = self.as_mapping()?;
        mapping
            .get(&Identifier::string(name))
            .or_else(|| mapping.get(&Identifier::symbol(name)))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Number(Number::Int(n.into())))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Number(Number::Int(n)))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        let number = i64::try_from(n).map_or(Number::UInt(n), Number::Int);
        Value::Scalar(Scalar::Number(number))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Number(Number::Float(n)))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::nil, Into::into)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::nil(),
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => {
                let number = if let Some(i) = n.as_i64() {
                    Number::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Number::UInt(u)
                } else {
                    Number::Float(n.as_f64().unwrap_or(f64::NAN))
                };
                Value::Scalar(Scalar::Number(number))
            }
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Identifier::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Int(n) => serializer.serialize_i64(*n),
            Number::UInt(n) => serializer.serialize_u64(*n),
            Number::Float(n) => serializer.serialize_f64(*n),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(Scalar::Nil) => serializer.serialize_unit(),
            Value::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Value::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            Value::Scalar(Scalar::String(s)) | Value::Scalar(Scalar::Symbol(s)) => {
                serializer.serialize_str(s)
            }
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_replaces_in_place() {
        let mut mapping = Mapping::new().with("a", 1).with("b", 2);
        let previous = mapping.insert(Identifier::from("a"), Value::from(3));

        assert_eq!(previous, Some(Value::from(1)));
        let keys: Vec<&str> = mapping.keys().map(Identifier::name).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(mapping.get(&"a".into()), Some(&Value::from(3)));
    }

    #[test]
    fn string_and_symbol_keys_are_distinct() {
        let mapping = Mapping::new()
            .with(Identifier::symbol("name"), "sym")
            .with("name", "str");
        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get(&Identifier::symbol("name")),
            Some(&Value::from("sym"))
        );
    }

    #[test]
    fn equality_ignores_order() {
        let a = Mapping::new().with("x", 1).with("y", 2);
        let b = Mapping::new().with("y", 2).with("x", 1);
        assert_eq!(a, b);
        assert_ne!(a, Mapping::new().with("x", 1));
    }

    #[test]
    fn from_json_keeps_structure() {
        let value = Value::from(json!({
            "vm_name": "web01",
            "memory": 2048,
            "dynamic": true,
            "notes": null,
            "disks": [{"path": "C:\\disk.vhdx"}]
        }));

        assert_eq!(value.get("vm_name"), Some(&Value::from("web01")));
        assert_eq!(value.get("memory"), Some(&Value::from(2048)));
        assert_eq!(value.get("dynamic"), Some(&Value::from(true)));
        assert!(value.get("notes").map(Value::is_nil).unwrap_or(false));
        assert!(value.get("disks").and_then(Value::as_sequence).is_some());
    }

    #[test]
    fn serializes_symbols_as_strings() {
        let value = Value::from(
            Mapping::new()
                .with(Identifier::symbol("State"), Value::symbol("Running"))
                .with("Cpu", 2),
        );
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"State": "Running", "Cpu": 2})
        );
    }

    #[test]
    fn deserializes_from_json_text() {
        let value: Value = serde_json::from_str(r#"[1, 2.5, "x", false]"#).unwrap();
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::from(1),
                Value::from(2.5),
                Value::from("x"),
                Value::from(false),
            ])
        );
    }

    #[test]
    fn large_unsigned_numbers_stay_unsigned() {
        assert_eq!(
            Value::from(u64::MAX),
            Value::Scalar(Scalar::Number(Number::UInt(u64::MAX)))
        );
        assert_eq!(Value::from(7u64), Value::from(7));
    }
}
