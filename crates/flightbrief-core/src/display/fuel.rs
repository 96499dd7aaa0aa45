//! Tabular display of a fuel summary.

use std::fmt;

use super::PlainText;
use crate::{
    document::{Cell, Row, Table},
    format::js_number,
    fuel::FuelSummary,
    time::hours_minutes,
};

/// Newtype wrapper listing every fuel category with its time and fuel,
/// followed by the fuel over destination.
///
/// ```rust
/// use flightbrief_core::{display::FuelTable, fuel::FuelSummary, models::RawFlightPlan};
/// # fn main() -> flightbrief_core::Result<()> {
/// let plan = RawFlightPlan::from_json_str(r#"{
///     "fuel": {"taxi": "200", "enroute_burn": "3650", "contingency": "183",
///              "alternate_burn": "1150", "reserve": "1050"},
///     "times": {"est_time_enroute": "4020", "taxi_out": "600",
///               "reserve_time": "1800", "contfuel_time": "240"}
/// }"#)?;
/// let summary = FuelSummary::from_plan(&plan)?;
///
/// let output = FuelTable(&summary).to_string();
/// assert!(output.contains("fuel_load"));
/// assert!(output.contains("6233"));
/// # Ok(())
/// # }
/// ```
pub struct FuelTable<'a>(pub &'a FuelSummary);

impl FuelTable<'_> {
    fn table(&self) -> Table {
        let header = Row::new([
            Cell::new("CATEGORY"),
            Cell::new("TIME").right(),
            Cell::new("FUEL KG").right(),
        ]);

        let rows = self.0.iter().map(|(category, value)| {
            Row::new([
                Cell::new(category.as_str()),
                Cell::new(hours_minutes(value.time)).right(),
                Cell::new(js_number(value.fuel)).right(),
            ])
        });

        let fod = Row::new([
            Cell::new("fuel_over_destination"),
            Cell::new("").right(),
            Cell::new(js_number(self.0.fuel_over_destination())).right(),
        ]);

        Table::new().row(header).rows(rows).row(fod)
    }
}

impl fmt::Display for FuelTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlainText(&self.table()))
    }
}
