//! Top-level OFP record and its small passthrough sections.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{de, Airport, Alternate, Fuel, FuelExtra, Navlog, Times};
use crate::error::Result;

/// The raw operational flight plan as produced by SimBrief.
///
/// Only the fields the brief templates read are modeled; everything else in
/// the source document is ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawFlightPlan {
    pub params: Params,
    pub api_params: ApiParams,
    pub general: General,
    pub origin: Airport,
    pub destination: Airport,
    /// Diversion airports, normalized from SimBrief's object-or-list encoding
    #[serde(deserialize_with = "de::one_or_many")]
    pub alternate: Vec<Alternate>,
    pub navlog: Navlog,
    pub atc: Atc,
    pub aircraft: Aircraft,
    pub fuel: Fuel,
    pub fuel_extra: FuelExtra,
    pub times: Times,
    pub weights: Weights,
    pub impacts: Impacts,
    pub crew: Crew,
}

impl RawFlightPlan {
    /// Parses an OFP from SimBrief's JSON output.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an OFP from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The normalized alternate list.
    pub fn alternates(&self) -> &[Alternate] {
        &self.alternate
    }

    /// The primary (first planned) alternate, if any.
    pub fn first_alternate(&self) -> Option<&Alternate> {
        self.alternate.first()
    }

    /// Whether the sector is flagged for extended-range operations.
    pub fn is_etops(&self) -> bool {
        self.general.is_etops != "0"
    }
}

/// Request bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Params {
    #[serde(deserialize_with = "de::text")]
    pub request_id: String,
}

/// Parameters the plan was requested with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiParams {
    /// Flight date, unix seconds
    #[serde(deserialize_with = "de::text")]
    pub date: String,
}

/// General flight data and planning profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    #[serde(deserialize_with = "de::text")]
    pub flight_number: String,
    /// `"0"` for non-ETOPS sectors
    #[serde(deserialize_with = "de::text")]
    pub is_etops: String,
    /// Free-text dispatcher remarks
    #[serde(deserialize_with = "de::text")]
    pub dx_rmk: String,
    #[serde(deserialize_with = "de::text")]
    pub cruise_profile: String,
    #[serde(deserialize_with = "de::text")]
    pub climb_profile: String,
    #[serde(deserialize_with = "de::text")]
    pub descent_profile: String,
    /// `IDENT/ALT/IDENT/ALT/...`
    #[serde(deserialize_with = "de::text")]
    pub stepclimb_string: String,
    #[serde(deserialize_with = "de::text")]
    pub avg_temp_dev: String,
    #[serde(deserialize_with = "de::text")]
    pub avg_wind_comp: String,
    #[serde(deserialize_with = "de::text")]
    pub route_distance: String,
    #[serde(deserialize_with = "de::text")]
    pub air_distance: String,
    #[serde(deserialize_with = "de::text")]
    pub passengers: String,
    #[serde(deserialize_with = "de::text")]
    pub route: String,
}

/// ATC filing data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Atc {
    #[serde(deserialize_with = "de::text")]
    pub flightplan_text: String,
    #[serde(deserialize_with = "de::text")]
    pub callsign: String,
    #[serde(deserialize_with = "de::text")]
    pub initial_alt: String,
    /// `F` for flight levels, `A` for altitudes
    #[serde(deserialize_with = "de::text")]
    pub initial_alt_unit: String,
}

impl Atc {
    /// Altitude unit as printed on the form (`F` is written `FL`).
    pub fn altitude_prefix(&self) -> String {
        if self.initial_alt_unit == "F" {
            "FL".to_string()
        } else {
            self.initial_alt_unit.clone()
        }
    }
}

/// Aircraft identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Aircraft {
    /// Registration, e.g. `VH-VGA`
    #[serde(deserialize_with = "de::text")]
    pub reg: String,
    /// Fleet number
    #[serde(deserialize_with = "de::text")]
    pub fin: String,
    /// Performance factor, signed percent
    #[serde(deserialize_with = "de::text")]
    pub fuelfactor: String,
}

impl Aircraft {
    /// Registration without its nationality prefix (`VH-VGA` → `VGA`).
    pub fn short_reg(&self) -> &str {
        self.reg
            .split_once('-')
            .map_or(self.reg.as_str(), |(_, mark)| mark)
    }
}

/// Planned and limiting weights, kilograms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Weights {
    #[serde(deserialize_with = "de::text")]
    pub oew: String,
    #[serde(deserialize_with = "de::text")]
    pub payload: String,
    #[serde(deserialize_with = "de::text")]
    pub est_zfw: String,
    #[serde(deserialize_with = "de::text")]
    pub max_zfw: String,
    #[serde(deserialize_with = "de::text")]
    pub est_tow: String,
    #[serde(deserialize_with = "de::text")]
    pub max_tow: String,
    #[serde(deserialize_with = "de::text")]
    pub est_ldw: String,
    #[serde(deserialize_with = "de::text")]
    pub max_ldw: String,
}

/// Cost-index and weight-sensitivity scenarios.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Impacts {
    pub higher_ci: ImpactScenario,
    pub minus_2000ft: ImpactScenario,
    pub zfw_plus_1000: ImpactScenario,
}

/// One alternative planning scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImpactScenario {
    #[serde(deserialize_with = "de::text")]
    pub time_enroute: String,
    #[serde(deserialize_with = "de::text")]
    pub enroute_burn: String,
    #[serde(deserialize_with = "de::text")]
    pub burn_difference: String,
    #[serde(deserialize_with = "de::text")]
    pub initial_fl: String,
    #[serde(deserialize_with = "de::text")]
    pub cost_index: String,
}

/// Crew roster. Empty names mean the role is not staffed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Crew {
    #[serde(deserialize_with = "de::text")]
    pub cpt: String,
    #[serde(deserialize_with = "de::text")]
    pub fo: String,
    /// Dispatcher
    #[serde(deserialize_with = "de::text")]
    pub dx: String,
    /// Flight attendants, senior first
    #[serde(deserialize_with = "de::text_list")]
    pub fa: Vec<String>,
}
