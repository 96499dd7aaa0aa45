//! Pages 1 and 2.

use super::{dispatch::dispatch_block, fuel_summary::fuel_summary, header::page_header, BriefContext};
use crate::{
    document::{Page, TextStyle},
    error::Result,
};

const SIGNATURE_LINES: [&str; 4] = [
    "Final Fuel Load Requested:__________________",
    "PIC Signature:_____________________ Date:______________________",
    "PIC's signature confirms the acceptance of this flight plan.",
    "PIC to sign and leave form with ground staff.",
];

/// The form the PIC signs to accept the plan and fuel load.
pub(super) fn acceptance_page(ctx: &BriefContext<'_>) -> Result<Page> {
    let page = Page::new("Flight Plan Acceptance Form")
        .table(page_header(ctx)?)
        .text(TextStyle::Header, "Flight Plan Acceptance Form")
        .text(TextStyle::SubHeader, "Crew / Dispatch Data")
        .extend(dispatch_block(ctx)?)
        .text(TextStyle::SubHeader, "ATC FP")
        .blank()
        .text(TextStyle::Body, &ctx.plan.atc.flightplan_text)
        .text(TextStyle::SubHeader, "Fuel Summary")
        .extend(fuel_summary(ctx))
        .text(TextStyle::Rule, "");

    let page = SIGNATURE_LINES
        .iter()
        .fold(page, |page, line| page.text(TextStyle::Body, *line));

    Ok(page.text(TextStyle::Rule, ""))
}

pub(super) fn blank_page(ctx: &BriefContext<'_>) -> Result<Page> {
    Ok(Page::new("Intentionally Left Blank")
        .table(page_header(ctx)?)
        .text(TextStyle::Notice, "Intentionally Left Blank"))
}
