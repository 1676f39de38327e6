use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::config::lenient;

/// What to do with a log event that carries no `message` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MessagePolicy {
    /// Fail the whole batch; nothing is forwarded.
    #[default]
    Abort,
    /// Drop the offending event and forward the rest.
    Skip,
}

impl FromStr for MessagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(MessagePolicy::Abort),
            "skip" => Ok(MessagePolicy::Skip),
            _ => Err(format!(
                "Invalid missing message policy: '{s}'. Valid policies are: abort, skip",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for MessagePolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::deserialize_or_default(deserializer, "missing message policy")
    }
}
