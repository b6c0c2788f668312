//! Forgiving field decoders for stored and imported documents.
//!
//! A layout written by another build can carry values this one does not know,
//! such as a screen size outside the preset table or a misspelled wall. These
//! decoders replace such a value with its default, or drop the single list
//! entry it lives in, so the rest of the document still loads.

#[cfg(test)]
#[path = "lenient_test.rs"]
mod lenient_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// Decode a field, falling back to `T::default()` when its value does not parse.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            debug!(error = %e, field = std::any::type_name::<T>(), "unreadable field replaced by its default");
            Ok(T::default())
        }
    }
}

/// Decode a list, dropping the entries that do not parse.
pub(crate) fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        debug!(item = std::any::type_name::<T>(), "list field is not an array; using an empty list");
        return Ok(Vec::new());
    };
    let mut decoded = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value(entry) {
            Ok(item) => decoded.push(item),
            Err(e) => warn!(error = %e, item = std::any::type_name::<T>(), "dropping unreadable list entry"),
        }
    }
    Ok(decoded)
}
