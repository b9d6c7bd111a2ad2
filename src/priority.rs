use std::fmt;

use serde::{de::value, de::IntoDeserializer, Deserialize, Serialize};

/// Delivery priority of a push message.
///
/// Normal-priority messages may be batched until the device wakes up;
/// high-priority messages are delivered immediately.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}

impl std::str::FromStr for Priority {
    type Err = value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f)
    }
}
