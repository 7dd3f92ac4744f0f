//! Row decoding.
//!
//! Rows arrive as raw JSON and are validated against their record types here,
//! before anything else in the crate sees them.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::platform::PlatformError;

/// Decode a nullable column, substituting the type's default for `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn decode_row<T: DeserializeOwned>(row: Value) -> Result<T, PlatformError> {
    Ok(serde_json::from_value(row)?)
}

pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, PlatformError> {
    rows.into_iter().map(decode_row).collect()
}
