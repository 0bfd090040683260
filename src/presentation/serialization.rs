/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Deserializes `null` as `T::default()`
///
/// The API sends `"links": null` or `"meta": null` on some resources; plain
/// `#[serde(default)]` only covers missing fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a `meta` object into string values
///
/// Numbers and booleans are kept as their JSON text, `null` values are
/// dropped, nested objects are kept as compact JSON.
pub fn metadata<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::Null => None,
            Value::String(s) => Some((k, s)),
            other => Some((k, other.to_string())),
        })
        .collect())
}
