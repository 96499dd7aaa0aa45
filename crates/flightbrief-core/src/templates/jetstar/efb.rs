//! Page 4, EFB effectivity.

use super::BriefContext;
use crate::document::{Cell, Page, Row, Table, TextStyle};

pub(super) fn efb_page(ctx: &BriefContext<'_>) -> Page {
    let profile = ctx.profile;

    let versions = Table::new().row(Row::new([
        Cell::new("Current approved IPAD iOS version range"),
        Cell::new(&profile.ios_version_range),
    ]));

    let mut applications = Table::new()
        .row(Row::new([
            Cell::new("Application").width(30),
            Cell::new("Current Data Version").center(),
            Cell::new("Next Version").center(),
            Cell::new("Effective From").center(),
        ]))
        .row(Row::spacer());

    for entry in &profile.efb {
        applications = applications.row(Row::new([
            Cell::new(&entry.application),
            Cell::new(&entry.current_version).center(),
            Cell::new(&entry.next_version).center(),
            Cell::new(&entry.effective_from).center(),
        ]));
        if let Some(notes) = &entry.notes {
            applications = applications
                .row(Row::new([Cell::new(format!("Notes: {notes}")).span(4)]))
                .row(Row::spacer());
        }
    }

    Page::new("EFB Effectivity")
        .text(TextStyle::Header, "EFB Effectivity")
        .blank()
        .table(versions)
        .blank()
        .text(TextStyle::Body, &profile.efb_reference)
        .blank()
        .table(applications)
}
