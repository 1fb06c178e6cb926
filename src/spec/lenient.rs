//! Tolerant decoding over `serde_json::Value`.
//!
//! A document only fails to load when it is not well-formed JSON or YAML.
//! Inside a well-formed document, collections that are absent, `null`, or
//! not a sequence read as empty, records that are not mappings read as
//! records with every field absent, and non-string scalars read as their
//! JSON text. The validator then reports what is wrong with them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decodes a sequence field; anything but a sequence reads as empty.
pub(super) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Decodes any value, then builds `T` from it without failing.
pub(super) fn from_value<'de, D, T>(
    deserializer: D,
    build: impl FnOnce(&Value) -> T,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(build(&Value::deserialize(deserializer)?))
}

/// Field lookup that treats a non-mapping record as having no fields.
pub(super) fn field<'a>(record: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a Value> {
    record.and_then(|map| map.get(key))
}

/// The items of a sequence, or nothing.
pub(super) fn items(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// A string as written; any other value as its JSON text.
pub(super) fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Like [`text`], but absent and `null` read as `None`.
pub(super) fn optional_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| !v.is_null()).map(text)
}

/// A sequence of scalars as text.
pub(super) fn text_list(value: Option<&Value>) -> Vec<String> {
    items(value).iter().map(text).collect()
}
