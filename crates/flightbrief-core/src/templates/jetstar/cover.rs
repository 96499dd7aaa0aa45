//! Page 3, the cover page.

use log::debug;

use super::{header::page_header, BriefContext};
use crate::{
    document::{Cell, Page, Row, Table, TextStyle},
    error::Result,
    format::title_case,
    models::numeric::{parse_number, parse_seconds},
    time::{hours_minutes, UtcInstant},
};

/// Crew sign on ahead of the scheduled departure.
const SIGN_ON_LEAD: i64 = 3600;

/// Flight duty period allowed from sign on, per the duty matrix.
const MATRIX_DUTY: i64 = 11 * 3600;

const MATRIX_DISCLAIMER: &str = "\u{2022} The Matrix Expiry Time is calculated from utilising SCHEDULED sign on time & the OM 1 Sec 5 Tables 5-2/3: Maximum Hours per Flight Duty Periods. As such the calculated time is not valid for Split Duty or Augmented Crew operations nor does it consider Flight Deck Duty Limits or Extensions. The Matrix Expiry Time is provided as a guide only. For the official expiry time consult crewing or reference OM 1.";

pub(super) fn cover_page(ctx: &BriefContext<'_>) -> Result<Page> {
    let plan = ctx.plan;

    let etops = if plan.is_etops() {
        (TextStyle::Banner { inverted: true }, "ETOPS Sector")
    } else {
        (TextStyle::Banner { inverted: false }, "NON ETOPS Sector")
    };

    let sector = format!(
        "Sector {} - {} ({} - {})",
        plan.origin.iata_code,
        plan.destination.iata_code,
        title_case(&plan.origin.name),
        title_case(&plan.destination.name)
    );

    Ok(Page::new("Flight Brief Cover Page")
        .table(page_header(ctx)?)
        .text(TextStyle::Header, "FLIGHT BRIEF COVER PAGE")
        .text(etops.0, etops.1)
        .text(TextStyle::SubHeader, "Sector Data")
        .text(TextStyle::Body, sector)
        .table(sector_times(ctx)?)
        .key_value("Dispatcher:", &plan.crew.dx)
        .text(TextStyle::SubHeader, "Crew List")
        .table(crew_list(ctx)?)
        .blank()
        .text(TextStyle::Body, MATRIX_DISCLAIMER)
        .text(TextStyle::SubHeader, "JQ Contact Details")
        .table(contacts(ctx))
        .text(TextStyle::Header, "ACTIVE AIRCRAFT MEL ITEMS")
        .table(Table::new().row(Row::new([
            Cell::new("MEL #"),
            Cell::new("Opened"),
            Cell::new("Description").width(24),
            Cell::new("Def"),
            Cell::new("Expires"),
            Cell::new("EFR").width(12),
        ])))
        .text(TextStyle::Notice, "No MEL Records found for this aircraft"))
}

/// Scheduled times in UTC and local time, with block time, EET and pax.
fn sector_times(ctx: &BriefContext<'_>) -> Result<Table> {
    let times = &ctx.plan.times;
    let sched_out = UtcInstant::parse("times.sched_out", &times.sched_out)?;
    let sched_in = UtcInstant::parse("times.sched_in", &times.sched_in)?;
    let orig_offset = parse_number("times.orig_timezone", &times.orig_timezone)?;
    let dest_offset = parse_number("times.dest_timezone", &times.dest_timezone)?;
    let block = parse_seconds("times.sched_block", &times.sched_block)?;

    Ok(Table::new()
        .row(Row::new(["", "UTC", "Loc", "FLT PLAN", "", "PAX"]))
        .row(Row::new([
            "STD:".to_string(),
            sched_out.utc_clock(":"),
            sched_out.local_clock(orig_offset)?,
            "Block".to_string(),
            "EET".to_string(),
            ctx.plan.general.passengers.clone(),
        ]))
        .row(Row::new([
            "STA:".to_string(),
            sched_in.utc_clock(":"),
            sched_in.local_clock(dest_offset)?,
            hours_minutes(block),
            hours_minutes(ctx.fuel.flight().time),
            String::new(),
        ])))
}

/// One row per staffed role. Absent roles print nothing.
fn crew_list(ctx: &BriefContext<'_>) -> Result<Table> {
    let crew = &ctx.plan.crew;
    let employee = ctx.profile.employee_number.as_str();

    let mut table = Table::new().row(Row::new([
        "EMP NO",
        "Rank",
        "CREW Name",
        "Sectors",
        "Sign-on Time (UTC)",
        "Matrix Expiry Time (UTC)",
    ]));

    let unscheduled = |rank: &str, name: &str| {
        Row::new([
            Cell::new(employee),
            Cell::new(rank),
            Cell::new(name.to_uppercase()),
            Cell::new("").center(),
            Cell::new("").center(),
            Cell::new("").center(),
        ])
    };

    if !crew.cpt.is_empty() {
        table = table.row(unscheduled("CP", &crew.cpt));
    }

    if !crew.fo.is_empty() {
        let sched_out = UtcInstant::parse("times.sched_out", &ctx.plan.times.sched_out)?;
        let sign_on = sched_out.subtract_offset(SIGN_ON_LEAD)?;
        let expiry = sched_out.add_offset(MATRIX_DUTY)?;
        table = table.row(Row::new([
            Cell::new(employee),
            Cell::new("FO"),
            Cell::new(crew.fo.to_uppercase()),
            Cell::new("1").center(),
            Cell::new(sign_on.utc_clock(":")).center(),
            Cell::new(expiry.utc_clock(":")).center(),
        ]));
    }

    for (i, attendant) in crew.fa.iter().enumerate() {
        let rank = if i == 0 { "CM" } else { "LF" };
        table = table.row(unscheduled(rank, attendant));
    }

    debug!("Crew list has {} rows", table.rows.len() - 1);
    Ok(table)
}

/// Contact directory laid out in two columns.
fn contacts(ctx: &BriefContext<'_>) -> Table {
    let directory = &ctx.profile.contacts;
    let half = (directory.len() + 1) / 2;
    let (left, right) = directory.split_at(half);

    let rows = left.iter().enumerate().map(|(i, contact)| {
        let mut cells = vec![
            Cell::new(&contact.region),
            Cell::new(&contact.number),
        ];
        if let Some(other) = right.get(i) {
            cells.push(Cell::new(&other.region));
            cells.push(Cell::new(&other.number));
        }
        Row::new(cells)
    });

    Table::new().rows(rows)
}
