//! Tolerant `deserialize_with` helpers for UniProt JSON
//!
//! UniProt entries are irregular: keys come and go, values are null, and an
//! object is occasionally replaced by something else. These helpers turn every
//! such surprise into "absent" so that decoding a record never fails on shape.
//! Use them together with `#[serde(default)]`.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Nested object; anything that is not a JSON object decodes as `None`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Scalar of the expected type; null or a mistyped value decodes as `None`.
pub fn scalar<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// List of objects. A non-list decodes as empty; a non-object item decodes as
/// `T::default()` so positions in the list are kept.
pub fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(optional_objects(deserializer)?.unwrap_or_default())
}

/// Like [`objects`], but keeps "not a list" distinguishable from "empty list".
pub fn optional_objects<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        items
            .into_iter()
            .map(|item| {
                if item.is_object() {
                    serde_json::from_value(item).unwrap_or_default()
                } else {
                    T::default()
                }
            })
            .collect(),
    ))
}

/// Any JSON value, kept verbatim. An explicit `null` decodes as
/// `Some(Value::Null)`, a missing key (via `#[serde(default)]`) as `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
