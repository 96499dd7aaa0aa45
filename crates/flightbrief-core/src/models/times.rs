//! Schedule and duration fields.

use serde::{Deserialize, Serialize};

use super::de;

/// Times block of the OFP.
///
/// Instants are unix seconds; durations are seconds; the two timezone fields
/// are hour offsets from UTC and may be fractional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Times {
    #[serde(deserialize_with = "de::text")]
    pub est_time_enroute: String,
    #[serde(deserialize_with = "de::text")]
    pub sched_out: String,
    #[serde(deserialize_with = "de::text")]
    pub sched_off: String,
    #[serde(deserialize_with = "de::text")]
    pub sched_in: String,
    #[serde(deserialize_with = "de::text")]
    pub sched_block: String,
    #[serde(deserialize_with = "de::text")]
    pub est_out: String,
    #[serde(deserialize_with = "de::text")]
    pub est_in: String,
    #[serde(deserialize_with = "de::text")]
    pub orig_timezone: String,
    #[serde(deserialize_with = "de::text")]
    pub dest_timezone: String,
    #[serde(deserialize_with = "de::text")]
    pub taxi_out: String,
    #[serde(deserialize_with = "de::text")]
    pub reserve_time: String,
    #[serde(deserialize_with = "de::text")]
    pub contfuel_time: String,
}
