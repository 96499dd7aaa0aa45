//! Page 5, the operational flight plan.

use log::debug;

use super::{
    dispatch::dispatch_block, fuel_summary::fuel_summary, header::page_header,
    navlog::navigation_log, BriefContext,
};
use crate::{
    document::{Cell, Page, Row, Section, Table, TextBlock, TextStyle},
    error::{BriefError, FieldResultExt, Result},
    format::{decode_step_string, js_number, pad_zero, sign_prefixed},
    models::{
        numeric::{parse_number, parse_seconds, parse_seconds_or_zero},
        ImpactScenario,
    },
    time::{hours_minutes, to_hours_minutes, UtcInstant},
};

/// Width of the `XXXX` separator lines.
const RULE_WIDTH: usize = 69;

/// Seconds allowed for a missed approach when estimating alternate ETA.
const MISSED_APPROACH_ALLOWANCE: i64 = 600;

fn banner(text: &str) -> Section {
    Section::Text(TextBlock::new(TextStyle::Banner { inverted: false }, text))
}

fn body(text: impl Into<String>) -> Section {
    Section::Text(TextBlock::new(TextStyle::Body, text))
}

fn blank() -> Section {
    Section::Text(TextBlock::new(TextStyle::Blank, ""))
}

fn x_rule() -> Section {
    Section::Text(TextBlock::new(TextStyle::Rule, "X".repeat(RULE_WIDTH)))
}

pub(super) fn flight_plan_page(ctx: &BriefContext<'_>) -> Result<Page> {
    let page = Page::new("Flight Plan")
        .table(page_header(ctx)?)
        .extend(dispatch_block(ctx)?)
        .blank()
        .extend(remarks(ctx))
        .extend(identification(ctx)?)
        .extend(route(ctx)?)
        .table(schedule(ctx)?)
        .extend(load_summary(ctx))
        .blank()
        .extend([banner("FUEL SUMMARY"), blank()])
        .extend(fuel_summary(ctx))
        .blank()
        .extend(level_summaries(ctx)?)
        .extend(alternate_summaries(ctx)?)
        .extend([
            banner("CRITICAL FUEL SUMMARIES"),
            Section::Text(TextBlock::new(TextStyle::Notice, "NO CRITICAL FUEL SUMMARIES")),
            blank(),
        ])
        .extend([
            banner("NAVIGATION LOG"),
            body(format!("CO ROUTE {}-1", ctx.city_pair())),
            blank(),
        ])
        .table(navigation_log(ctx)?);

    Ok(page)
}

/// Dispatcher remarks and the filed ATC plan.
fn remarks(ctx: &BriefContext<'_>) -> Vec<Section> {
    let plan = ctx.plan;
    vec![
        banner("DISPATCHER REMARKS"),
        body(&plan.general.dx_rmk),
        blank(),
        x_rule(),
        body("FILED ATC PLAN"),
        body("-".repeat(16)),
        body(&plan.atc.flightplan_text),
        blank(),
        banner("JETSTAR FLIGHT PLAN"),
    ]
}

/// Sector, flight and plan reference tables.
fn identification(ctx: &BriefContext<'_>) -> Result<Vec<Section>> {
    let plan = ctx.plan;
    let sched_off = UtcInstant::parse("times.sched_off", &plan.times.sched_off)?;

    let flight = Table::new()
        .row(Row::new(["FROM/TO", "FLT NO./DATE", "REG"]))
        .row(Row::new([
            format!("{}/{}", plan.origin.icao_code, plan.destination.icao_code),
            format!("{}/{}", plan.atc.callsign, sched_off.abbreviated_date()),
            plan.aircraft.reg.clone(),
        ]));

    let reference = Table::new()
        .row(Row::new(["CO ROUTE", "OPER BASIS", "PLAN NUMBER"]))
        .row(Row::new([
            format!(
                "{}{}-1",
                plan.origin.iata_code, plan.destination.iata_code
            ),
            "LF".to_string(),
            plan.params.request_id.clone(),
        ]));

    Ok(vec![
        Section::Table(flight),
        blank(),
        Section::Table(reference),
        blank(),
    ])
}

/// Route description, vertical profile and planning factors.
fn route(ctx: &BriefContext<'_>) -> Result<Vec<Section>> {
    let general = &ctx.plan.general;
    let origin = &ctx.plan.origin;
    let destination = &ctx.plan.destination;

    let fuel_factor = parse_number("aircraft.fuelfactor", &ctx.plan.aircraft.fuelfactor)?;
    let wind = parse_number("general.avg_wind_comp", &general.avg_wind_comp)?;
    let temperature = parse_number("general.avg_temp_dev", &general.avg_temp_dev)?;

    Ok(vec![
        body("ROUTE DESCRIPTION"),
        body(format!(
            "RWY {} {} {} {} RWY {}",
            origin.plan_rwy,
            origin.icao_code,
            general.route,
            destination.icao_code,
            destination.plan_rwy
        )),
        blank(),
        body("ROUTE PROFILE"),
        body(decode_step_string(&general.stepclimb_string)),
        blank(),
        body(format!(
            "CLIMB  {}\tCRZ  {}\tDESCENT {}",
            general.climb_profile, general.cruise_profile, general.descent_profile
        )),
        body(format!("PERF FACTOR {}.0", sign_prefixed(fuel_factor, 0))),
        body(format!(
            "AVG WIND {}  AVG TEMP DEV {} UPPER AIR DATA DD/MD/FC /071212",
            sign_prefixed(wind, 3),
            sign_prefixed(temperature, 2)
        )),
        blank(),
    ])
}

/// Scheduled and estimated times with blanks for actual block times.
fn schedule(ctx: &BriefContext<'_>) -> Result<Table> {
    let plan = ctx.plan;
    let times = &plan.times;
    let zulu = |field: &str, text: &str| -> Result<String> {
        Ok(format!("{} Z", UtcInstant::parse(field, text)?.utc_clock("")))
    };
    let block = parse_seconds("times.sched_block", &times.sched_block)?;

    Ok(Table::new()
        .row(Row::new([
            format!("STD {}", plan.origin.iata_code),
            zulu("times.sched_out", &times.sched_out)?,
            format!("STA {}", plan.destination.iata_code),
            zulu("times.sched_in", &times.sched_in)?,
            "EET".to_string(),
            hours_minutes(ctx.fuel.flight().time),
        ]))
        .row(Row::new([
            "ETD".to_string(),
            zulu("times.est_out", &times.est_out)?,
            "ETA".to_string(),
            zulu("times.est_in", &times.est_in)?,
            "BLOCK".to_string(),
            hours_minutes(block),
        ]))
        .row(Row::new(["BLOX OFF", ".... Z", "BLOX ON", ".... Z"])))
}

/// Planned weights with blanks for revisions and the structural limits.
fn load_summary(ctx: &BriefContext<'_>) -> Vec<Section> {
    let plan = ctx.plan;
    let weights = &plan.weights;
    let revision = ".........";

    let row = |label: String, planned: &str, revised: &str, limit: Option<(&str, &str)>| {
        Row::new([
            Cell::new(label),
            Cell::new(planned).right(),
            Cell::new(revised),
            Cell::new(limit.map_or_else(String::new, |(name, value)| format!("{name}  {value}")))
                .center(),
        ])
    };

    let takeoff_fuel = js_number(ctx.fuel.takeoff().fuel);
    let flight_fuel = js_number(ctx.fuel.flight().fuel);

    let table = Table::new()
        .row(Row::new([
            Cell::new("PLANNED WEIGHTS"),
            Cell::new(""),
            Cell::new("REV WEIGHTS"),
            Cell::new("LIMITING WEIGHTS").center(),
        ]))
        .row(row(
            format!("PAYLOAD (PAX {})", plan.general.passengers),
            &weights.payload,
            "",
            None,
        ))
        .row(row("DRY OPERATING WEIGHT".into(), &weights.oew, "", None))
        .row(row(
            "ZERO FUEL WEIGHT".into(),
            &weights.est_zfw,
            revision,
            Some(("MZFW", weights.max_zfw.as_str())),
        ))
        .row(row("TAKE-OFF FUEL".into(), &takeoff_fuel, revision, None))
        .row(row(
            "TAKE-OFF WEIGHT".into(),
            &weights.est_tow,
            revision,
            Some(("MTOW", weights.max_tow.as_str())),
        ))
        .row(row("FLIGHT FUEL".into(), &flight_fuel, revision, None))
        .row(row(
            "LANDING WEIGHT".into(),
            &weights.est_ldw,
            revision,
            Some(("MLDW", weights.max_ldw.as_str())),
        ));

    vec![
        banner("LOAD SUMMARY"),
        blank(),
        Section::Table(table),
        blank(),
    ]
}

fn scenario_line(field: &str, scenario: &ImpactScenario) -> Result<String> {
    let time = parse_seconds_or_zero(field, Some(&scenario.time_enroute))?;
    Ok(format!(
        "RTE 01  CRZ-CI{}   FLIGHT FUEL   {}  EET {}  ETA ....",
        pad_zero(&scenario.cost_index, 3),
        scenario.enroute_burn,
        to_hours_minutes(time, "")
    ))
}

/// Main plan totals and the cost-index / altitude alternatives.
fn level_summaries(ctx: &BriefContext<'_>) -> Result<Vec<Section>> {
    let plan = ctx.plan;
    let fuel = ctx.fuel;
    let prefix = plan.atc.altitude_prefix();
    let impacts = &plan.impacts;

    Ok(vec![
        banner("FLIGHT LEVEL SUMMARIES"),
        blank(),
        body(format!("ROUTE {}-1", ctx.city_pair())),
        body(format!(
            "MAIN PLAN FLIGHT FUEL   {} FUEL LOAD   {} EET {}",
            js_number(fuel.flight().fuel),
            js_number(fuel.fuel_load().fuel),
            hours_minutes(fuel.flight().time)
        )),
        body(format!("{prefix}{}", plan.atc.initial_alt)),
        body(scenario_line(
            "impacts.higher_ci.time_enroute",
            &impacts.higher_ci,
        )?),
        body(format!("{prefix}{}", impacts.minus_2000ft.initial_fl)),
        body(scenario_line(
            "impacts.minus_2000ft.time_enroute",
            &impacts.minus_2000ft,
        )?),
        blank(),
    ])
}

/// One row block per planned alternate, or a notice when there are none.
fn alternate_summaries(ctx: &BriefContext<'_>) -> Result<Vec<Section>> {
    let plan = ctx.plan;
    let mut sections = vec![banner("ALTERNATE SUMMARIES"), blank()];

    if ctx.alternates.is_empty() {
        debug!("No alternates planned");
        sections.push(Section::Text(TextBlock::new(
            TextStyle::Notice,
            "NO ALTERNATES PLANNED",
        )));
        sections.push(blank());
        return Ok(sections);
    }

    let sched_out = UtcInstant::parse("times.sched_out", &plan.times.sched_out)?;
    let arrival = sched_out.add_offset(ctx.fuel.flight().time)?;

    let mut table = Table::new().row(Row::new([
        "", "", "MORA", "TTK", "DIST", "FL", "TIME", "ETA", "BURN", "RWY",
    ]));

    for (i, alternate) in ctx.alternates.iter().enumerate() {
        let ete_field = format!("alternate[{i}].ete");
        let ete = parse_seconds_or_zero(&ete_field, alternate.ete.as_deref())?;
        let eta = ete
            .checked_add(MISSED_APPROACH_ALLOWANCE)
            .ok_or_else(|| BriefError::invalid_input(&ete_field).with_reason("ETA out of range"))
            .and_then(|seconds| arrival.add_offset(seconds))
            .map_err(|e| match e {
                BriefError::InvalidInput { reason, .. } => {
                    BriefError::invalid_input(&ete_field).with_reason(reason)
                }
                other => other,
            })?;
        let level = alternate
            .cruise_altitude
            .as_deref()
            .map(|alt| {
                alt.trim()
                    .parse::<f64>()
                    .map(|feet| js_number(feet / 100.0))
                    .field_context_lazy(|| format!("alternate[{i}].cruise_altitude"))
            })
            .transpose()?
            .unwrap_or_default();

        let iata = alternate.iata_code.as_deref().unwrap_or_default();
        let icao = alternate.icao_code.as_deref().unwrap_or_default();

        table = table
            .row(Row::new([
                "LDG ALTERNATE -".to_string(),
                iata.to_string(),
                "XXX".to_string(),
                alternate.track_true.clone().unwrap_or_default(),
                pad_zero(alternate.air_distance.as_deref().unwrap_or_default(), 4),
                level,
                to_hours_minutes(ete, ":"),
                eta.utc_clock(""),
                alternate.burn.clone().unwrap_or_default(),
                alternate.plan_rwy.clone().unwrap_or_default(),
            ]))
            .row(Row::new([Cell::new(format!(
                "CO ROUTE {}-{iata}\t 1 {} {} {icao}",
                plan.destination.iata_code,
                plan.destination.icao_code,
                alternate.route.as_deref().unwrap_or_default(),
            ))
            .span(10)]))
            .row(Row::spacer());
    }

    debug!("Listed {} alternates", ctx.alternates.len());
    sections.push(body("FUEL INCLUDES MISSED APPROACH ALLOWANCE"));
    sections.push(blank());
    sections.push(Section::Table(table));
    sections.push(blank());
    Ok(sections)
}
