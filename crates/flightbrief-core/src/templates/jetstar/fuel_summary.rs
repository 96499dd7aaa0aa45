//! Fuel summary table, printed on the acceptance form and the flight plan.

use super::BriefContext;
use crate::{
    document::{Cell, Row, Section, Table, TextBlock, TextStyle},
    format::{js_number, pad_zero},
    fuel::FuelTime,
    time::hours_minutes,
};

/// Placeholder for the handwritten revised fuel column.
const REVISION: &str = "........";

fn fuel_row(label: impl Into<String>, value: FuelTime) -> Row {
    Row::new([
        Cell::new(label),
        Cell::new(hours_minutes(value.time)),
        Cell::new(js_number(value.fuel)).right(),
        Cell::new("").right(),
        Cell::new("").right(),
        Cell::new(REVISION),
    ])
}

fn fixed_row(label: &str) -> Row {
    Row::new([
        Cell::new(label),
        Cell::new("00.00"),
        Cell::new("0000").right(),
        Cell::new("").right(),
        Cell::new("").right(),
        Cell::new(REVISION),
    ])
}

pub(super) fn fuel_summary(ctx: &BriefContext<'_>) -> Vec<Section> {
    let plan = ctx.plan;
    let fuel = ctx.fuel;
    let first_alternate = ctx.alternates.first();

    let header = Row::new([
        Cell::new(""),
        Cell::new("TIME"),
        Cell::new("FUEL").right(),
        Cell::new("DIST").right(),
        Cell::new("NAM").right(),
        Cell::new("REV FUEL").right(),
    ]);

    let flight = Row::new([
        Cell::new("FLIGHT FUEL"),
        Cell::new(hours_minutes(fuel.flight().time)),
        Cell::new(js_number(fuel.flight().fuel)).right(),
        Cell::new(pad_zero(&plan.general.route_distance, 4)).right(),
        Cell::new(pad_zero(&plan.general.air_distance, 4)).right(),
        Cell::new(REVISION),
    ]);

    let alternate_icao = first_alternate
        .and_then(|a| a.icao_code.as_deref())
        .unwrap_or("NIL");
    let alternate_distance = first_alternate
        .and_then(|a| a.distance.as_deref())
        .map_or_else(|| "0000".to_string(), |d| pad_zero(d, 4));
    let alternate_air_distance = first_alternate
        .and_then(|a| a.air_distance.as_deref())
        .map(|d| pad_zero(d, 4))
        .unwrap_or_default();

    let alternate = Row::new([
        Cell::new(format!("ALTN      {alternate_icao}")),
        Cell::new(hours_minutes(fuel.alternate().time)),
        Cell::new(js_number(fuel.alternate().fuel)).right(),
        Cell::new(alternate_distance).right(),
        Cell::new(alternate_air_distance).right(),
        Cell::new(REVISION),
    ]);

    let extra = Row::new([
        Cell::new("EXTRA"),
        Cell::new(""),
        Cell::new(js_number(fuel.extra().fuel)).right(),
    ]);

    let fod = Row::new([
        Cell::new(""),
        Cell::new("FOD"),
        Cell::new(js_number(fuel.fuel_over_destination())).right(),
    ]);

    let table = Table::new()
        .row(header)
        .row(flight)
        .row(alternate)
        .row(fuel_row("VRBL RES", fuel.contingency()))
        .row(fuel_row("WXTFC", fuel.weather_traffic()))
        .row(fuel_row(
            format!("FIXED RES {} ", plan.destination.icao_code),
            fuel.fixed_reserve(),
        ))
        .row(fixed_row("ETP BUILD UP"))
        .row(fixed_row("ETP B/UP + WX"))
        .row(extra)
        .row(fuel_row("TAKE OFF", fuel.takeoff()))
        .row(fuel_row("TANKER", fuel.tanker()))
        .row(fuel_row("TAXI OUT", fuel.taxi()))
        .row(fuel_row("FUEL LOAD", fuel.fuel_load()))
        .row(Row::spacer())
        .row(fod);

    let tow_variation = format!(
        "FUEL BURN PER 1000KG VARIATION IN TOW {} KGS",
        pad_zero(&plan.impacts.zfw_plus_1000.burn_difference, 4)
    );

    vec![
        Section::Table(table),
        Section::Text(TextBlock::new(TextStyle::Blank, "")),
        Section::Text(TextBlock::new(TextStyle::Body, tow_variation)),
        Section::Text(TextBlock::new(
            TextStyle::Body,
            "FLIGHT FUEL INCLUDES MANOEUVRING FUEL",
        )),
    ]
}
