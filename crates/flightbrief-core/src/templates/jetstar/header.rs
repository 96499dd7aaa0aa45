//! Running page header.

use super::BriefContext;
use crate::{
    document::{Row, Table},
    error::Result,
    format::pad_zero,
    time::UtcInstant,
};

/// Flight ID, sector, aircraft and date strip printed atop most pages.
pub(super) fn page_header(ctx: &BriefContext<'_>) -> Result<Table> {
    let plan = ctx.plan;
    let date = UtcInstant::parse("api_params.date", &plan.api_params.date)?;
    let flight_id = pad_zero(&plan.general.flight_number, 4);
    let slashed_date = date.abbreviated_slashed_date();

    Ok(Table::new()
        .row(Row::new([
            "Flight Brief",
            "Flight ID:",
            flight_id.as_str(),
            plan.origin.iata_code.as_str(),
            "A/C:",
            plan.aircraft.short_reg(),
        ]))
        .row(Row::new([
            "",
            slashed_date.as_str(),
            "",
            plan.destination.iata_code.as_str(),
            "MSN:",
            plan.aircraft.fin.as_str(),
        ])))
}
