//! Raw fuel figures and extra-fuel buckets.

use serde::{Deserialize, Serialize};

use super::de;

/// Planned fuel quantities, kilograms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Fuel {
    #[serde(deserialize_with = "de::text")]
    pub taxi: String,
    #[serde(deserialize_with = "de::text")]
    pub enroute_burn: String,
    #[serde(deserialize_with = "de::text")]
    pub contingency: String,
    #[serde(deserialize_with = "de::text")]
    pub alternate_burn: String,
    #[serde(deserialize_with = "de::text")]
    pub reserve: String,
}

/// Additional labeled fuel allowances.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FuelExtra {
    #[serde(deserialize_with = "de::one_or_many")]
    pub bucket: Vec<Bucket>,
}

/// A labeled, additive fuel/time allowance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Bucket {
    #[serde(deserialize_with = "de::text")]
    pub label: String,
    /// Kilograms
    #[serde(deserialize_with = "de::text")]
    pub fuel: String,
    /// Seconds
    #[serde(deserialize_with = "de::text")]
    pub time: String,
}

/// How a bucket contributes to the fuel summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    /// `ATC` or `WXX`
    WeatherTraffic,
    /// `TANKERING`
    Tanker,
    /// Any other label
    Extra,
}

impl Bucket {
    /// Classifies the bucket by its label.
    pub fn kind(&self) -> BucketKind {
        match self.label.as_str() {
            "ATC" | "WXX" => BucketKind::WeatherTraffic,
            "TANKERING" => BucketKind::Tanker,
            _ => BucketKind::Extra,
        }
    }
}
