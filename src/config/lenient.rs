use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::error;

/// Deserializes a string-named setting, falling back to `T::default()` when
/// the value is not a string or names no known variant. The problem is
/// logged, not returned.
pub fn deserialize_or_default<'de, D, T>(deserializer: D, setting: &str) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String> + Default,
{
    let value = Value::deserialize(deserializer)?;

    if let Value::String(s) = value {
        match T::from_str(&s) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                error!("{}, using default", e);
                Ok(T::default())
            }
        }
    } else {
        error!("Expected a string for {}, got {:?}", setting, value);
        Ok(T::default())
    }
}
