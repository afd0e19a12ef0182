//! Serde adapter storing a [`chrono::Duration`] as whole seconds.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serializer, de};

pub(crate) fn serialize<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Duration, D::Error> {
    let seconds = i64::deserialize(deserializer)?;
    Duration::try_seconds(seconds).ok_or_else(|| de::Error::custom("duration out of range"))
}
