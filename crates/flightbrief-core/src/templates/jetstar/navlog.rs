//! Navigation log table.
//!
//! Each fix prints as a group of four rows: leg data, the fix with its
//! cumulative figures, airway and MORA, then a spacer. When the *next* fix
//! enters a new FIR, a boundary row and another spacer follow the group, so
//! the crossing prints between the two fixes it separates.

use log::trace;

use super::BriefContext;
use crate::{
    document::{Cell, Row, Table},
    error::Result,
    format::{degrees_minutes, js_number, normalize_stage_label, pad_space, pad_zero, sign_prefixed, strip_fir},
    models::{numeric::parse_number, FirEntry, Fix},
    time::hours_minutes,
};

/// Columns spanned by a full-width row.
const COLUMNS: usize = 11;

fn header() -> [Row; 3] {
    [
        Row::new([
            Cell::new("DIST"),
            Cell::new("MC"),
            Cell::new("ZT").right(),
            Cell::new("ETA"),
            Cell::new("FL"),
            Cell::new("WIND / COMP"),
            Cell::new("ISA"),
            Cell::new("TAS").span(4),
        ]),
        Row::new([
            Cell::new("TO/").span(2),
            Cell::new("ACTM").right(),
            Cell::new("ATA").span(3),
            Cell::new("DEV"),
            Cell::new("GS"),
            Cell::new("ACBO"),
            Cell::new("FUELRM"),
            Cell::new("SR"),
        ]),
        Row::new([Cell::new("AWY"), Cell::new("/ MORA").span(COLUMNS - 1)]),
    ]
}

pub(super) fn navigation_log(ctx: &BriefContext<'_>) -> Result<Table> {
    let plan = ctx.plan;
    let fixes = &plan.navlog.fix;
    let wind_component = sign_prefixed(
        parse_number("general.avg_wind_comp", &plan.general.avg_wind_comp)?,
        3,
    );

    let mut table = Table::new()
        .rows(header())
        .row(Row::spacer())
        .row(Row::new([
            Cell::new(&plan.origin.icao_code).span(3),
            Cell::new("...."),
            Cell::new("SET HDG TIME").span(7),
        ]))
        .row(Row::spacer());

    for (i, fix) in fixes.iter().enumerate() {
        trace!("Navlog fix {i}: {} ({})", fix.ident, fix.stage);
        table = table.rows(fix_rows(i, fix, &wind_component)?);

        if let Some(next) = fixes.get(i + 1) {
            if let Some(entry) = next.fir_entry() {
                trace!("FIR boundary into {} before {}", entry.fir_icao, next.ident);
                table = table
                    .row(boundary_row(i + 1, next, entry)?)
                    .row(Row::spacer());
            }
        }
    }

    Ok(table)
}

fn fix_rows(i: usize, fix: &Fix, wind_component: &str) -> Result<[Row; 4]> {
    let field = |name: &str| format!("navlog.fix[{i}].{name}");
    let cruising = fix.is_cruise();
    let stage = normalize_stage_label(&fix.stage);

    let leg_time = parse_number(&field("time_leg"), &fix.time_leg)?;
    let total_time = parse_number(&field("time_total"), &fix.time_total)?;
    let remaining = parse_number(&field("fuel_plan_onboard"), &fix.fuel_plan_onboard)?;

    let (level, isa) = if cruising {
        let altitude = parse_number(&field("altitude_feet"), &fix.altitude_feet)?;
        let deviation = parse_number(&field("oat_isa_dev"), &fix.oat_isa_dev)?;
        (js_number(altitude / 100.0), sign_prefixed(deviation, 2))
    } else {
        (stage.to_string(), stage.to_string())
    };

    let leg = Row::new([
        Cell::new(pad_zero(&fix.distance, 3)),
        Cell::new(pad_zero(&fix.track_mag, 3)),
        Cell::new(((leg_time / 60.0).round() as i64).to_string()).right(),
        Cell::new("...."),
        Cell::new(level),
        Cell::new(format!(
            "{}/{}  {wind_component}",
            pad_zero(&fix.wind_dir, 3),
            pad_zero(&fix.wind_spd, 3)
        )),
        Cell::new(isa),
        Cell::new(pad_zero(&fix.true_airspeed, 3)),
        Cell::new("....."),
        Cell::new("...."),
    ]);

    let cumulative = Row::new([
        Cell::new(&fix.ident).span(2),
        Cell::new(hours_minutes(total_time.floor() as i64)).right(),
        Cell::new("...."),
        Cell::new("..."),
        Cell::new(".............").span(2),
        Cell::new(&fix.groundspeed),
        Cell::new(pad_zero(&fix.fuel_totalused, 5)),
        Cell::new(pad_space(&format!("{:.1}", remaining / 1000.0), 4)),
        Cell::new("XX"),
    ]);

    let airway = Row::new([
        Cell::new(&fix.via_airway),
        Cell::new(format!("/ {}", fix.mora.as_deref().unwrap_or_default())),
    ]);

    Ok([leg, cumulative, airway, Row::spacer()])
}

/// The FIR boundary crossed on the way to fix `i`.
fn boundary_row(i: usize, fix: &Fix, entry: &FirEntry) -> Result<Row> {
    let base = format!("navlog.fix[{i}].fir_crossing.fir");
    let lat = parse_number(&format!("{base}.pos_lat_entry"), &entry.pos_lat_entry)?;
    let lon = parse_number(&format!("{base}.pos_long_entry"), &entry.pos_long_entry)?;

    Ok(Row::new([
        Cell::new(format!("-{}", fix.fir)),
        Cell::new(degrees_minutes(lat, lon)).span(3),
        Cell::new(strip_fir(&entry.fir_name)).center().span(5),
        Cell::new("--------").right().span(2),
    ]))
}
