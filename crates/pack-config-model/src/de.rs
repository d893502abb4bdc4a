//! Deserialization helpers shared by the model types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a key that is present, keeping an explicit `null` as `Some(Null)`.
///
/// Paired with `#[serde(default)]`, a missing key stays `None`, so a value
/// written as `null` serializes back as `null` instead of disappearing.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
