//! Lenient deserializers for SimBrief's loosely typed JSON.
//!
//! SimBrief encodes absent text as an empty object (`{}`), sometimes sends
//! numbers where strings are documented, and collapses one-element lists
//! into a bare object. These helpers fold those shapes into plain Rust types.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::as_list;

fn value_to_text<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        other => Err(E::custom(format!("expected text, found {other}"))),
    }
}

/// Text field; `null` and `{}` become an empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value)?.unwrap_or_default())
}

/// Optional text field; `null` and `{}` become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_text(value)
}

/// List of text values; a bare string becomes a one-element list.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(text) = value_to_text(item)? {
            out.push(text);
        }
    }
    Ok(out)
}

/// Single object, list of objects, or empty object, normalized to a list.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    as_list(value)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
        .collect()
}
