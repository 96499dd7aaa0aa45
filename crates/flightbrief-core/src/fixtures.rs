//! Shared OFP fixture for unit tests.

use crate::models::RawFlightPlan;

const JST_YMML_YSSY: &str = include_str!("../tests/fixtures/jst_ymml_yssy.json");

/// JST512 Melbourne to Sydney with one alternate and one FIR crossing.
pub(crate) fn sample_plan() -> RawFlightPlan {
    RawFlightPlan::from_json_str(JST_YMML_YSSY).expect("fixture should parse")
}
