use flightbrief_core::{
    document::Section,
    generate, BriefConfig, BriefError, Carrier, Document, FuelSummary, PlainText, RawFlightPlan,
};
use serde_json::json;

mod common;

use common::{fixture_json, fixture_path, plan_from};

fn jetstar(plan: &RawFlightPlan) -> Document {
    generate(plan, Carrier::Jetstar, &BriefConfig::default()).expect("Failed to generate brief")
}

#[test]
fn test_fixture_reader_and_str_agree() {
    let file = std::fs::File::open(fixture_path()).expect("Failed to open fixture");
    let from_reader = RawFlightPlan::from_reader(file).expect("Failed to parse from reader");
    assert_eq!(from_reader, plan_from(&fixture_json()));
}

#[test]
fn test_brief_renders_every_page() {
    let document = jetstar(&plan_from(&fixture_json()));
    let text = PlainText(&document).to_string();

    assert!(text.contains("Page 1 of 5: Flight Plan Acceptance Form"));
    assert!(text.contains("Page 3 of 5: Flight Brief Cover Page"));
    assert!(text.contains("Page 5 of 5: Flight Plan"));
    assert!(text.contains("NON ETOPS Sector"));
    assert!(text.contains("JETSTAR FLIGHT PLAN"));
}

#[test]
fn test_fir_crossing_into_sydney() {
    let mut json = fixture_json();
    json["navlog"]["fix"][3]["fir"] = json!("YSSY");
    json["navlog"]["fix"][3]["fir_crossing"] = json!({
        "fir": {
            "fir_icao": "YSSY",
            "fir_name": "SYDNEY FIR",
            "pos_lat_entry": "-33.5",
            "pos_long_entry": "150.25"
        }
    });

    let document = jetstar(&plan_from(&json));
    let boundary = document
        .sections()
        .filter_map(|section| match section {
            Section::Table(table) => Some(table),
            _ => None,
        })
        .flat_map(|table| table.rows.iter())
        .find(|row| row.cells.first().is_some_and(|cell| cell.text == "-YSSY"))
        .expect("Sydney boundary row");

    let cells: Vec<_> = boundary.cells.iter().map(|cell| cell.text.as_str()).collect();
    assert_eq!(cells, vec!["-YSSY", "S33 30.0 E150 15.0", "SYDNEY ", "--------"]);
}

#[test]
fn test_no_alternates_notice() {
    let mut json = fixture_json();
    json["alternate"] = json!([]);

    let plan = plan_from(&json);
    assert!(plan.alternates().is_empty());

    let lines = jetstar(&plan).text_lines();
    assert!(lines.iter().any(|line| line == "NO ALTERNATES PLANNED"));
    assert!(!lines.iter().any(|line| line.starts_with("LDG ALTERNATE")));
}

#[test]
fn test_missing_alternate_field_behaves_like_empty_list() {
    let mut json = fixture_json();
    json.as_object_mut()
        .expect("fixture is an object")
        .remove("alternate");
    let missing = jetstar(&plan_from(&json));

    json["alternate"] = json!([]);
    assert_eq!(missing, jetstar(&plan_from(&json)));
}

#[test]
fn test_single_object_alternate_normalizes_to_list() {
    let listed = fixture_json();
    let mut single = listed.clone();
    single["alternate"] = listed["alternate"][0].clone();

    let plan = plan_from(&single);
    assert_eq!(plan.alternates().len(), 1);
    assert_eq!(plan.alternates()[0].icao_code.as_deref(), Some("YSCB"));
    assert_eq!(jetstar(&plan), jetstar(&plan_from(&listed)));
}

#[test]
fn test_missing_tanker_bucket_is_zero() {
    let mut json = fixture_json();
    json["fuel_extra"]["bucket"]
        .as_array_mut()
        .expect("bucket list")
        .retain(|bucket| bucket["label"] != "TANKERING");

    let summary = FuelSummary::from_plan(&plan_from(&json)).expect("Failed to summarize fuel");
    assert_eq!(summary.tanker().fuel, 0.0);
    assert_eq!(summary.tanker().time, 0);
}

#[test]
fn test_unparseable_bucket_fuel_fails_with_path() {
    let mut json = fixture_json();
    json["fuel_extra"]["bucket"][1]["fuel"] = json!("lots");

    let err = generate(&plan_from(&json), Carrier::Jetstar, &BriefConfig::default())
        .expect_err("Generation should fail");
    assert!(matches!(err, BriefError::InvalidInput { .. }));
    assert_eq!(err.field(), Some("fuel_extra.bucket[1].fuel"));
}

#[test]
fn test_unparseable_schedule_fails_with_path() {
    let mut json = fixture_json();
    json["times"]["sched_out"] = json!("tomorrow");

    let err = generate(&plan_from(&json), Carrier::Jetstar, &BriefConfig::default())
        .expect_err("Generation should fail");
    assert_eq!(err.field(), Some("times.sched_out"));
}

#[test]
fn test_unknown_carrier() {
    let err = "QFA".parse::<Carrier>().expect_err("QFA is not supported");
    match err {
        BriefError::UnknownCarrier { code, supported } => {
            assert_eq!(code, "QFA");
            assert_eq!(supported, "JST");
        }
        other => panic!("Unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = RawFlightPlan::from_json_str("{ not json").expect_err("Parsing should fail");
    assert!(matches!(err, BriefError::Serialization { .. }));
}

#[test]
fn test_profile_values_flow_into_brief() {
    let mut config = BriefConfig::default();
    config.jetstar.desk_extension = "03 9999 0000".to_string();
    config.jetstar.employee_number = "654321".to_string();

    let document = generate(&plan_from(&fixture_json()), Carrier::Jetstar, &config)
        .expect("Failed to generate brief");
    let lines = document.text_lines();
    assert!(lines.iter().any(|line| line.contains("03 9999 0000")));
    assert!(lines.iter().any(|line| line.starts_with("654321 FO")));
}

#[test]
fn test_document_json_round_trip() {
    let document = jetstar(&plan_from(&fixture_json()));
    let json = serde_json::to_string(&document).expect("Failed to serialize document");
    let parsed: Document = serde_json::from_str(&json).expect("Failed to parse document");
    assert_eq!(parsed, document);
}

#[test]
fn test_generation_is_deterministic() {
    let plan = plan_from(&fixture_json());
    assert_eq!(jetstar(&plan), jetstar(&plan));
}
