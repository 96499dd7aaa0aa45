//! Navigation log fixes.

use serde::{Deserialize, Serialize};

use super::de;

/// Ordered waypoints of the planned route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Navlog {
    pub fix: Vec<Fix>,
}

/// A single navlog waypoint with its leg and cumulative data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Fix {
    #[serde(deserialize_with = "de::text")]
    pub ident: String,
    /// `CLB`, `CRZ` or `DSC`
    #[serde(deserialize_with = "de::text")]
    pub stage: String,
    #[serde(deserialize_with = "de::text")]
    pub via_airway: String,
    /// FIR the fix lies in
    #[serde(deserialize_with = "de::text")]
    pub fir: String,
    #[serde(deserialize_with = "de::text")]
    pub distance: String,
    #[serde(deserialize_with = "de::text")]
    pub track_mag: String,
    #[serde(deserialize_with = "de::text")]
    pub altitude_feet: String,
    #[serde(deserialize_with = "de::text")]
    pub true_airspeed: String,
    #[serde(deserialize_with = "de::text")]
    pub groundspeed: String,
    /// Seconds
    #[serde(deserialize_with = "de::text")]
    pub time_leg: String,
    /// Seconds since departure
    #[serde(deserialize_with = "de::text")]
    pub time_total: String,
    #[serde(deserialize_with = "de::text")]
    pub fuel_totalused: String,
    #[serde(deserialize_with = "de::text")]
    pub fuel_plan_onboard: String,
    #[serde(deserialize_with = "de::text")]
    pub oat_isa_dev: String,
    #[serde(deserialize_with = "de::text")]
    pub wind_dir: String,
    #[serde(deserialize_with = "de::text")]
    pub wind_spd: String,
    #[serde(deserialize_with = "de::optional_text")]
    pub mora: Option<String>,
    pub fir_crossing: Option<FirCrossing>,
}

impl Fix {
    /// Whether the fix is in the cruise segment.
    pub fn is_cruise(&self) -> bool {
        self.stage == "CRZ"
    }

    /// FIR boundary entry data carried by this fix, if any.
    pub fn fir_entry(&self) -> Option<&FirEntry> {
        self.fir_crossing.as_ref().and_then(|c| c.fir.as_ref())
    }
}

/// Wrapper SimBrief puts around a FIR boundary crossing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FirCrossing {
    pub fir: Option<FirEntry>,
}

/// Point where the route enters a new flight information region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FirEntry {
    #[serde(deserialize_with = "de::text")]
    pub fir_icao: String,
    #[serde(deserialize_with = "de::text")]
    pub fir_name: String,
    #[serde(deserialize_with = "de::text")]
    pub pos_lat_entry: String,
    #[serde(deserialize_with = "de::text")]
    pub pos_long_entry: String,
}
