//! Core library for the flight brief generator.
//!
//! This crate turns a SimBrief operational flight plan (OFP) into a
//! carrier-specific flight brief: an ordered set of pages made of text
//! blocks, key/value lines and tables. It does no I/O beyond parsing the
//! input record and reading an optional configuration file.
//!
//! # Pipeline
//!
//! Data flows one way:
//!
//! - **Input** ([`models`]): [`RawFlightPlan`] deserialized from SimBrief
//!   JSON, with every measured quantity kept as the string SimBrief sent
//! - **Derivation** ([`fuel`], [`time`], [`format`]): the fuel summary,
//!   immutable UTC instants and fixed-width field formatting
//! - **Assembly** ([`templates`]): a [`BriefTemplate`] per [`Carrier`]
//!   composes the derived values into a [`Document`]
//! - **Rendering** ([`display`]): Display wrappers such as [`PlainText`]
//!   and [`display::Markdown`] format the document for a terminal
//!
//! Assembly is pure. The same plan and configuration always produce the same
//! document, and any required field that fails to parse aborts generation
//! with a [`BriefError`] naming the field path.
//!
//! # Quick Start
//!
//! ```rust
//! use flightbrief_core::{generate, BriefConfig, Carrier, PlainText, RawFlightPlan};
//!
//! # fn example(json: &str) -> flightbrief_core::Result<()> {
//! let plan = RawFlightPlan::from_json_str(json)?;
//! let document = generate(&plan, Carrier::Jetstar, &BriefConfig::default())?;
//!
//! for page in &document.pages {
//!     println!("{}", page.title);
//! }
//! println!("{}", PlainText(&document));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod document;
pub mod error;
pub mod format;
pub mod fuel;
pub mod models;
pub mod templates;
pub mod time;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use config::{BriefConfig, ConfigBuilder, JetstarProfile};
pub use display::{FuelTable, Markdown, PlainText};
pub use document::Document;
pub use error::{BriefError, Result};
pub use fuel::{FuelCategory, FuelSummary, FuelTime};
pub use models::RawFlightPlan;
pub use templates::{BriefTemplate, Carrier};
pub use time::UtcInstant;

/// Builds the brief for `plan` using `carrier`'s template configured from
/// `config`.
///
/// # Errors
///
/// Returns `BriefError::InvalidInput` naming the offending field if any
/// value the layout needs fails to parse.
pub fn generate(plan: &RawFlightPlan, carrier: Carrier, config: &BriefConfig) -> Result<Document> {
    log::debug!("Generating {carrier} brief for flight {}", plan.general.flight_number);
    carrier.template(config).assemble(plan)
}
