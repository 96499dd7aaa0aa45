//! The Jetstar flight brief.
//!
//! Five pages, in print order:
//!
//! 1. Flight plan acceptance form, signed by the PIC and left with ground staff
//! 2. Intentionally left blank
//! 3. Cover page: sector data, crew list, contacts, MEL items
//! 4. EFB effectivity
//! 5. The flight plan proper, ending with the navigation log
//!
//! Blocks shared between pages (page header, dispatch data, fuel summary)
//! live in their own modules and are rebuilt wherever they are printed.

use log::debug;

use super::{BriefTemplate, Carrier};
use crate::{
    config::JetstarProfile,
    document::Document,
    error::Result,
    fuel::FuelSummary,
    models::{Alternate, RawFlightPlan},
};

mod acceptance;
mod cover;
mod dispatch;
mod efb;
mod flight_plan;
mod fuel_summary;
mod header;
mod navlog;

#[cfg(test)]
mod tests;

/// Everything a block builder reads. Built once per generation.
pub(crate) struct BriefContext<'a> {
    pub plan: &'a RawFlightPlan,
    pub fuel: &'a FuelSummary,
    pub alternates: &'a [Alternate],
    pub profile: &'a JetstarProfile,
}

impl BriefContext<'_> {
    /// `MEL-SYD`, used in route and plan designators.
    pub fn city_pair(&self) -> String {
        format!(
            "{}-{}",
            self.plan.origin.iata_code, self.plan.destination.iata_code
        )
    }
}

/// Lays out the Jetstar brief.
#[derive(Debug, Clone, Default)]
pub struct JetstarTemplate {
    profile: JetstarProfile,
}

impl JetstarTemplate {
    pub fn new(profile: JetstarProfile) -> Self {
        Self { profile }
    }
}

impl BriefTemplate for JetstarTemplate {
    fn carrier(&self) -> Carrier {
        Carrier::Jetstar
    }

    fn assemble(&self, plan: &RawFlightPlan) -> Result<Document> {
        let fuel = FuelSummary::from_plan(plan)?;
        let ctx = BriefContext {
            plan,
            fuel: &fuel,
            alternates: plan.alternates(),
            profile: &self.profile,
        };

        let pages = [
            acceptance::acceptance_page(&ctx)?,
            acceptance::blank_page(&ctx)?,
            cover::cover_page(&ctx)?,
            efb::efb_page(&ctx),
            flight_plan::flight_plan_page(&ctx)?,
        ];

        let mut document = Document::new(self.carrier().code());
        for page in pages {
            debug!(
                "Assembled page '{}' with {} sections",
                page.title,
                page.sections.len()
            );
            document = document.page(page);
        }
        Ok(document)
    }
}
