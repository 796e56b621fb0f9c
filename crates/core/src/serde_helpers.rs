//! Serde helpers shared by request DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(value)`, including an explicit
/// `null` (which becomes `Some(None)` for an `Option<Option<T>>` field).
///
/// Combine with `#[serde(default)]` so an absent field stays `None`:
///
/// ```ignore
/// #[serde(default, deserialize_with = "deserialize_some")]
/// pub serial_number: Option<Option<String>>,
/// ```
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
