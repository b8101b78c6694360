use serde::{Deserialize, Deserializer};

pub mod channel;
pub mod message;
pub mod query;
pub mod user;

/// Decode a list that the server may send as `null`; `null` and a missing
/// key both become an empty list. Pair with `#[serde(default)]`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
