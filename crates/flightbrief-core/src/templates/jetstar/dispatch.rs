//! Crew / dispatch data block.

use super::BriefContext;
use crate::{
    document::{Cell, Row, Section, Table, TextBlock, TextStyle},
    error::Result,
    time::UtcInstant,
};

/// Flight identification and the dispatcher responsible for the plan.
pub(super) fn dispatch_block(ctx: &BriefContext<'_>) -> Result<Vec<Section>> {
    let plan = ctx.plan;
    let date = UtcInstant::parse("api_params.date", &plan.api_params.date)?;

    let flight = Table::new()
        .row(Row::new(["CAPTAIN"]))
        .row(Row::new([
            Cell::new("FLT NO."),
            Cell::new("FROM /  TO"),
            Cell::new("DATE").center(),
            Cell::new("AIRCRAFT"),
        ]))
        .row(Row::new([
            Cell::new(&plan.atc.callsign),
            Cell::new(format!(
                "{} / {}",
                plan.origin.iata_code, plan.destination.iata_code
            ))
            .right(),
            Cell::new(date.abbreviated_date()).center(),
            Cell::new(&plan.aircraft.reg).center(),
        ]));

    let dispatcher = Table::new()
        .row(Row::new([
            "FLIGHT DIST OFFICER",
            "DESK EXTENSION",
            "FLIGHT-PLAN REF",
        ]))
        .row(Row::new([
            Cell::new(&plan.crew.dx),
            Cell::new(&ctx.profile.desk_extension).center(),
            Cell::new(&plan.params.request_id).center(),
        ]));

    Ok(vec![
        Section::Table(flight),
        Section::Text(TextBlock::new(TextStyle::Blank, "")),
        Section::Table(dispatcher),
    ])
}
