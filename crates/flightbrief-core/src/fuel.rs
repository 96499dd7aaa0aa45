//! Fuel and time accounting derived from the raw OFP.
//!
//! A [`FuelSummary`] is built once per brief from the plan's fuel, times and
//! extra-fuel buckets. Every figure is parsed up front, so a malformed field
//! fails the whole generation instead of surfacing later as a bogus total.
//!
//! # Categories
//!
//! | Category        | Time                     | Fuel                      |
//! |-----------------|--------------------------|---------------------------|
//! | flight          | `times.est_time_enroute` | `fuel.enroute_burn`       |
//! | alternate       | first alternate `ete`    | `fuel.alternate_burn`     |
//! | contingency     | `times.contfuel_time`    | `fuel.contingency`        |
//! | weather/traffic | ATC + WXX buckets        | ATC + WXX buckets         |
//! | fixed reserve   | `times.reserve_time`     | `fuel.reserve`            |
//! | extra           | (none)                   | other buckets             |
//! | tanker          | TANKERING bucket         | TANKERING bucket          |
//! | taxi            | `times.taxi_out`         | `fuel.taxi`               |
//!
//! Fuel load sums every category (extra contributes fuel only); take-off fuel
//! is fuel load less taxi.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::{
    error::{BriefError, Result},
    models::{
        numeric::{parse_number, parse_seconds, parse_seconds_or_zero},
        BucketKind, RawFlightPlan,
    },
};

/// A time (seconds) and fuel (kilograms) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FuelTime {
    pub time: i64,
    pub fuel: f64,
}

impl FuelTime {
    pub fn new(time: i64, fuel: f64) -> Self {
        Self { time, fuel }
    }

    /// Fuel with no associated time.
    pub fn fuel_only(fuel: f64) -> Self {
        Self { time: 0, fuel }
    }

    /// Adds both components, or `None` if the time overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.time.checked_add(rhs.time)?, self.fuel + rhs.fuel))
    }

    /// Subtracts both components, or `None` if the time overflows.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.time.checked_sub(rhs.time)?, self.fuel - rhs.fuel))
    }
}

/// Sums category pairs, failing with `field` when the total time leaves
/// the `i64` range.
fn sum_checked(field: &str, pairs: &[FuelTime]) -> Result<FuelTime> {
    pairs.iter().try_fold(FuelTime::default(), |total, pair| {
        total.checked_add(*pair).ok_or_else(|| overflow(field))
    })
}

fn overflow(field: &str) -> BriefError {
    BriefError::invalid_input(field).with_reason("time total out of range")
}

/// Named rows of the fuel summary, in paper-form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelCategory {
    Flight,
    Alternate,
    Contingency,
    WeatherTraffic,
    FixedReserve,
    Extra,
    Takeoff,
    Tanker,
    Taxi,
    FuelLoad,
}

impl FuelCategory {
    /// All categories in display order.
    pub const ALL: [FuelCategory; 10] = [
        FuelCategory::Flight,
        FuelCategory::Alternate,
        FuelCategory::Contingency,
        FuelCategory::WeatherTraffic,
        FuelCategory::FixedReserve,
        FuelCategory::Extra,
        FuelCategory::Takeoff,
        FuelCategory::Tanker,
        FuelCategory::Taxi,
        FuelCategory::FuelLoad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelCategory::Flight => "flight",
            FuelCategory::Alternate => "alternate",
            FuelCategory::Contingency => "contingency",
            FuelCategory::WeatherTraffic => "weather_traffic",
            FuelCategory::FixedReserve => "fixed_reserve",
            FuelCategory::Extra => "extra",
            FuelCategory::Takeoff => "takeoff",
            FuelCategory::Tanker => "tanker",
            FuelCategory::Taxi => "taxi",
            FuelCategory::FuelLoad => "fuel_load",
        }
    }
}

impl fmt::Display for FuelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived fuel accounting for one flight plan. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelSummary {
    flight: FuelTime,
    alternate: FuelTime,
    contingency: FuelTime,
    weather_traffic: FuelTime,
    fixed_reserve: FuelTime,
    extra: FuelTime,
    tanker: FuelTime,
    taxi: FuelTime,
    fuel_load: FuelTime,
    takeoff: FuelTime,
}

impl FuelSummary {
    /// Derives every category from the plan.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::InvalidInput` naming the first required field that
    /// does not parse as a number.
    pub fn from_plan(plan: &RawFlightPlan) -> Result<Self> {
        let fuel = &plan.fuel;
        let times = &plan.times;

        let flight = FuelTime::new(
            parse_seconds("times.est_time_enroute", &times.est_time_enroute)?,
            parse_number("fuel.enroute_burn", &fuel.enroute_burn)?,
        );

        let alternate_time = parse_seconds_or_zero(
            "alternate[0].ete",
            plan.first_alternate().and_then(|a| a.ete.as_deref()),
        )?;
        let alternate = FuelTime::new(
            alternate_time,
            parse_number("fuel.alternate_burn", &fuel.alternate_burn)?,
        );

        let contingency = FuelTime::new(
            parse_seconds("times.contfuel_time", &times.contfuel_time)?,
            parse_number("fuel.contingency", &fuel.contingency)?,
        );

        let fixed_reserve = FuelTime::new(
            parse_seconds("times.reserve_time", &times.reserve_time)?,
            parse_number("fuel.reserve", &fuel.reserve)?,
        );

        let taxi = FuelTime::new(
            parse_seconds("times.taxi_out", &times.taxi_out)?,
            parse_number("fuel.taxi", &fuel.taxi)?,
        );

        let mut weather_traffic = FuelTime::default();
        let mut extra = FuelTime::default();
        let mut tanker: Option<FuelTime> = None;

        for (i, bucket) in plan.fuel_extra.bucket.iter().enumerate() {
            let fuel_field = format!("fuel_extra.bucket[{i}].fuel");
            let time_field = format!("fuel_extra.bucket[{i}].time");

            match bucket.kind() {
                BucketKind::WeatherTraffic => {
                    let pair = FuelTime::new(
                        parse_seconds(&time_field, &bucket.time)?,
                        parse_number(&fuel_field, &bucket.fuel)?,
                    );
                    weather_traffic = weather_traffic
                        .checked_add(pair)
                        .ok_or_else(|| overflow(&time_field))?;
                }
                BucketKind::Extra => {
                    extra.fuel += parse_number(&fuel_field, &bucket.fuel)?;
                }
                // Only the first tankering bucket counts.
                BucketKind::Tanker if tanker.is_none() => {
                    tanker = Some(FuelTime::new(
                        parse_seconds(&time_field, &bucket.time)?,
                        parse_number(&fuel_field, &bucket.fuel)?,
                    ));
                }
                BucketKind::Tanker => {}
            }
        }

        let tanker = tanker.unwrap_or_default();

        // Extra contributes fuel only.
        let timed = sum_checked(
            "fuel_load",
            &[flight, alternate, contingency, weather_traffic, fixed_reserve, tanker, taxi],
        )?;
        let fuel_load = FuelTime::new(timed.time, timed.fuel + extra.fuel);
        let takeoff = fuel_load
            .checked_sub(taxi)
            .ok_or_else(|| overflow("takeoff"))?;

        let summary = Self {
            flight,
            alternate,
            contingency,
            weather_traffic,
            fixed_reserve,
            extra,
            tanker,
            taxi,
            fuel_load,
            takeoff,
        };

        debug!(
            "Fuel summary: load {} kg, take-off {} kg, FOD {} kg",
            summary.fuel_load().fuel,
            summary.takeoff().fuel,
            summary.fuel_over_destination()
        );

        Ok(summary)
    }

    pub fn flight(&self) -> FuelTime {
        self.flight
    }

    pub fn alternate(&self) -> FuelTime {
        self.alternate
    }

    pub fn contingency(&self) -> FuelTime {
        self.contingency
    }

    pub fn weather_traffic(&self) -> FuelTime {
        self.weather_traffic
    }

    pub fn fixed_reserve(&self) -> FuelTime {
        self.fixed_reserve
    }

    /// Extra fuel carries no time component.
    pub fn extra(&self) -> FuelTime {
        self.extra
    }

    /// Zero when the plan has no tankering bucket.
    pub fn tanker(&self) -> FuelTime {
        self.tanker
    }

    pub fn taxi(&self) -> FuelTime {
        self.taxi
    }

    /// Total fuel load. Time excludes the extra category.
    pub fn fuel_load(&self) -> FuelTime {
        self.fuel_load
    }

    /// Fuel load less taxi fuel, for both time and fuel.
    pub fn takeoff(&self) -> FuelTime {
        self.takeoff
    }

    /// Fuel expected on board over the destination, kilograms.
    pub fn fuel_over_destination(&self) -> f64 {
        self.fuel_load().fuel - self.flight.fuel - self.taxi.fuel
    }

    /// Looks up a category.
    pub fn get(&self, category: FuelCategory) -> FuelTime {
        match category {
            FuelCategory::Flight => self.flight,
            FuelCategory::Alternate => self.alternate,
            FuelCategory::Contingency => self.contingency,
            FuelCategory::WeatherTraffic => self.weather_traffic,
            FuelCategory::FixedReserve => self.fixed_reserve,
            FuelCategory::Extra => self.extra,
            FuelCategory::Takeoff => self.takeoff(),
            FuelCategory::Tanker => self.tanker,
            FuelCategory::Taxi => self.taxi,
            FuelCategory::FuelLoad => self.fuel_load(),
        }
    }

    /// Every category with its value, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FuelCategory, FuelTime)> + '_ {
        FuelCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
