//! Data shapes for the SimBrief operational flight plan.
//!
//! These types mirror the subset of the SimBrief JSON that the brief
//! templates read. They are passthrough records: every measured quantity is
//! kept as the decimal string SimBrief sent, and is parsed (with the field
//! path attached to any failure) only where a template does arithmetic on it.
//! See [`numeric`] for the parsing helpers.
//!
//! # Loosely typed input
//!
//! SimBrief's JSON is converted from XML and carries a few quirks that the
//! deserializers in [`de`] absorb:
//!
//! - empty text arrives as `{}`
//! - a list with one element arrives as a bare object
//! - numbers sometimes arrive unquoted
//!
//! The `alternate` field in particular may be absent, a single object or a
//! list; it is normalized once on deserialization and the rest of the crate
//! only ever sees [`RawFlightPlan::alternates`].
//!
//! # Examples
//!
//! ```rust
//! use flightbrief_core::models::RawFlightPlan;
//!
//! let plan = RawFlightPlan::from_json_str(
//!     r#"{"general": {"flight_number": "512", "is_etops": "0"},
//!         "alternate": {"icao_code": "YSSY", "ete": "1800"}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(plan.general.flight_number, "512");
//! assert_eq!(plan.alternates().len(), 1);
//! assert!(!plan.is_etops());
//! ```

pub mod airport;
pub(crate) mod de;
pub mod fuel;
pub mod navlog;
pub mod numeric;
pub mod plan;
pub mod times;


pub use airport::{Airport, Alternate};
pub use fuel::{Bucket, BucketKind, Fuel, FuelExtra};
pub use navlog::{FirCrossing, FirEntry, Fix, Navlog};
pub use plan::{
    Aircraft, ApiParams, Atc, Crew, General, ImpactScenario, Impacts, Params, RawFlightPlan,
    Weights,
};
pub use times::Times;
