//! Airport records for origin, destination and alternates.

use serde::{Deserialize, Serialize};

use super::de;

/// Origin or destination airport.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Airport {
    #[serde(deserialize_with = "de::text")]
    pub icao_code: String,
    #[serde(deserialize_with = "de::text")]
    pub iata_code: String,
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    /// Planned runway
    #[serde(deserialize_with = "de::text")]
    pub plan_rwy: String,
}

/// A planned diversion airport.
///
/// Every field is optional: the paper form leaves a cell blank rather than
/// refusing to print when SimBrief omits part of an alternate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Alternate {
    #[serde(deserialize_with = "de::optional_text")]
    pub icao_code: Option<String>,
    #[serde(deserialize_with = "de::optional_text")]
    pub iata_code: Option<String>,
    #[serde(deserialize_with = "de::optional_text")]
    pub plan_rwy: Option<String>,
    /// Feet
    #[serde(deserialize_with = "de::optional_text")]
    pub cruise_altitude: Option<String>,
    /// Ground distance, nautical miles
    #[serde(deserialize_with = "de::optional_text")]
    pub distance: Option<String>,
    /// Air distance, nautical miles
    #[serde(deserialize_with = "de::optional_text")]
    pub air_distance: Option<String>,
    #[serde(deserialize_with = "de::optional_text")]
    pub track_true: Option<String>,
    /// Estimated time enroute, seconds
    #[serde(deserialize_with = "de::optional_text")]
    pub ete: Option<String>,
    /// Kilograms
    #[serde(deserialize_with = "de::optional_text")]
    pub burn: Option<String>,
    #[serde(deserialize_with = "de::optional_text")]
    pub route: Option<String>,
}
