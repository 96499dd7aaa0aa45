use std::path::PathBuf;

use flightbrief_core::RawFlightPlan;
use serde_json::Value;

/// Path to the JST512 Melbourne to Sydney OFP fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/jst_ymml_yssy.json")
}

/// The fixture as loose JSON, for tests that reshape the input.
pub fn fixture_json() -> Value {
    let text = std::fs::read_to_string(fixture_path()).expect("Failed to read fixture");
    serde_json::from_str(&text).expect("Fixture should be valid JSON")
}

/// Parses a (possibly reshaped) fixture into a plan.
pub fn plan_from(json: &Value) -> RawFlightPlan {
    RawFlightPlan::from_json_str(&json.to_string()).expect("Failed to parse plan")
}
